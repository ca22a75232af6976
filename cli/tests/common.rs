//! # DAVID CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command is
//! run inside a [`Sandbox`]: a temporary directory used as the working
//! directory, the home directory and the config directory, so neither a
//! developer's own `~/.david` nor their `config.toml` can leak into a test.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// # Get DAVID Command (`david_cmd`)
///
/// An `assert_cmd::Command` for the compiled `david` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn david_cmd() -> Command {
    Command::cargo_bin("david").expect("Failed to find david binary for testing")
}

/// An isolated environment for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create sandbox directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where sessions are stored for commands built by [`Sandbox::cmd`].
    pub fn store_dir(&self) -> PathBuf {
        self.dir.path().join("sessions")
    }

    /// `david` running in the sandbox with its session store inside it.
    pub fn cmd(&self) -> Command {
        let mut cmd = david_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("DAVID_STORE_DIR", self.store_dir())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Writes a project config file (`.david.toml`) into the sandbox.
    pub fn write_project_config(&self, contents: &str) {
        fs::write(self.path().join(".david.toml"), contents)
            .expect("Failed to write .david.toml");
    }

    /// Session ids from the store index, most recent first.
    pub fn session_ids(&self) -> Vec<String> {
        let index_path = self.store_dir().join("chat_history.json");
        let Ok(raw) = fs::read_to_string(index_path) else {
            return Vec::new();
        };
        let index: serde_json::Value =
            serde_json::from_str(&raw).expect("Session index is not valid JSON");
        index
            .as_array()
            .expect("Session index is not an array")
            .iter()
            .map(|entry| entry["id"].as_str().unwrap().to_string())
            .collect()
    }

    /// The stored transcript of session `id` as raw JSON.
    pub fn transcript(&self, id: &str) -> serde_json::Value {
        let raw = fs::read_to_string(self.store_dir().join(format!("chat_{id}.json")))
            .expect("Failed to read transcript");
        serde_json::from_str(&raw).expect("Transcript is not valid JSON")
    }
}
