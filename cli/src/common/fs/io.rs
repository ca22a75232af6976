//! # DAVID AI Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by the session store:
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and
//!   rejects paths that exist but are not directories.
//! - **`read_json`**: Reads and deserializes a JSON file, returning `None` when
//!   the file does not exist.
//! - **`write_json_atomic`**: Serializes a value to a sibling temp file and
//!   renames it over the target, so readers never observe a half-written file.
//! - **`remove_file_if_exists`**: Deletes a file, reporting whether it was there.
//!
//! All errors carry the offending path as context.
//!
use crate::core::error::{DavidError, Result};
use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing parents (like `mkdir -p`). If the
/// path exists but is not a directory, returns `DavidError::FileSystem`.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(DavidError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads a JSON document from `path`.
///
/// # Returns
///
/// * `Ok(None)` if the file does not exist.
/// * `Ok(Some(value))` if it was read and parsed.
///
/// # Errors
///
/// Returns an `Err` if the file exists but cannot be read or is not valid JSON for `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    };
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from file {:?}", path))?;
    Ok(Some(value))
}

/// Writes `value` as pretty-printed JSON to `path`, replacing any existing file.
///
/// The parent directory is created if needed. Data goes to `<path>.tmp` first
/// and is then renamed into place.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize JSON for {:?}", path))?;
    let tmp_path = tmp_sibling(path);
    fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write to file {:?}", tmp_path))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move {:?} into place at {:?}", tmp_path, path))?;
    debug!("Wrote JSON file: {:?}", path);
    Ok(())
}

/// Removes the file at `path`. Returns `false` if it did not exist.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to remove file {:?}", path)),
    }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    /// Test `ensure_dir_exists` when the directory needs to be created, including parents.
    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    /// Test `ensure_dir_exists` when the target path exists but is a file.
    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    /// Test writing JSON atomically and reading it back.
    #[test]
    fn test_write_then_read_json() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nested/sample.json");
        let sample = Sample {
            name: "david".into(),
            count: 3,
        };

        write_json_atomic(&file_path, &sample)?;

        assert!(file_path.exists());
        assert!(!tmp_sibling(&file_path).exists());
        let loaded: Option<Sample> = read_json(&file_path)?;
        assert_eq!(loaded, Some(sample));
        Ok(())
    }

    /// Test `read_json` on a missing file.
    #[test]
    fn test_read_json_missing_is_none() -> Result<()> {
        let base_dir = tempdir()?;
        let loaded: Option<Sample> = read_json(&base_dir.path().join("nope.json"))?;
        assert!(loaded.is_none());
        Ok(())
    }

    /// Test `read_json` on a corrupt file.
    #[test]
    fn test_read_json_corrupt_is_error() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("bad.json");
        fs::write(&file_path, "{not json")?;
        let result: Result<Option<Sample>> = read_json(&file_path);
        assert!(result.is_err());
        Ok(())
    }

    /// Test `remove_file_if_exists` reports presence.
    #[test]
    fn test_remove_file_if_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("gone.json");
        fs::write(&file_path, "{}")?;
        assert!(remove_file_if_exists(&file_path)?);
        assert!(!remove_file_if_exists(&file_path)?);
        Ok(())
    }
}
