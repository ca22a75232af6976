//! # File-backed Session Store
//!
//! File: cli/src/session/store.rs
//!
//! ## Overview
//!
//! Persists chat sessions in a directory, one JSON file per concern:
//!
//! ```text
//! <store dir>/
//! ├── chat_history.json      # [SessionSummary], most recently saved first
//! └── chat_<id>.json         # ChatSession (title, created_at, messages)
//! ```
//!
//! The index and the transcripts are plain JSON blobs without schema versions.
//! Every write replaces the whole file atomically. The store is meant for a
//! single process; concurrent writers would race on the index.
//!
use super::model::{ChatSession, SessionSummary};
use crate::common::fs::io;
use crate::core::error::{DavidError, Result};
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const INDEX_FILE_NAME: &str = "chat_history.json";
const TRANSCRIPT_PREFIX: &str = "chat_";

/// Handle on a session store directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Opens (and creates if needed) the store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        io::ensure_dir_exists(&root)?;
        debug!("Opened session store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Session summaries, most recently saved first.
    pub fn list(&self) -> Result<Vec<SessionSummary>> {
        Ok(io::read_json(&self.index_path())?.unwrap_or_default())
    }

    /// Starts a new, unsaved session. It is written on the first [`save`](Self::save).
    pub fn create_session(&self) -> ChatSession {
        let session = ChatSession::new();
        info!("Started new chat session {}", session.id);
        session
    }

    /// Loads a session and its transcript.
    ///
    /// # Errors
    ///
    /// `DavidError::InvalidSessionId` for ids that cannot be storage keys,
    /// `DavidError::SessionNotFound` when no transcript exists.
    pub fn load(&self, id: &str) -> Result<ChatSession> {
        let path = self.transcript_path(id)?;
        io::read_json(&path)?.ok_or_else(|| {
            anyhow!(DavidError::SessionNotFound {
                id: id.to_string()
            })
        })
    }

    /// Writes the transcript and moves the session to the front of the index.
    pub fn save(&self, session: &ChatSession) -> Result<()> {
        let path = self.transcript_path(&session.id)?;
        // Read the index before touching anything so a broken index leaves the store as it was.
        let mut index = self.list()?;
        index.retain(|entry| entry.id != session.id);
        index.insert(0, session.summary());

        io::write_json_atomic(&path, session)?;
        io::write_json_atomic(&self.index_path(), &index)?;
        debug!(
            "Saved session {} ({} messages)",
            session.id,
            session.messages.len()
        );
        Ok(())
    }

    /// Removes a session's transcript and index entry.
    ///
    /// # Errors
    ///
    /// `DavidError::SessionNotFound` if neither existed.
    pub fn delete(&self, id: &str) -> Result<()> {
        let path = self.transcript_path(id)?;
        let had_transcript = io::remove_file_if_exists(&path)?;

        let mut index = self.list()?;
        let before = index.len();
        index.retain(|entry| entry.id != id);
        let had_entry = index.len() != before;
        if had_entry {
            io::write_json_atomic(&self.index_path(), &index)?;
        }

        if !had_transcript && !had_entry {
            return Err(anyhow!(DavidError::SessionNotFound { id: id.to_string() }));
        }
        if had_transcript != had_entry {
            warn!("Session {} was only partially stored; removed what was left", id);
        }
        info!("Deleted session {}", id);
        Ok(())
    }

    /// Deletes every session. Returns how many index entries were removed.
    pub fn clear(&self) -> Result<usize> {
        let index = self.list()?;
        for entry in &index {
            match self.transcript_path(&entry.id) {
                Ok(path) => {
                    io::remove_file_if_exists(&path)?;
                }
                Err(e) => warn!("Skipping index entry with unusable id: {}", e),
            }
        }
        io::remove_file_if_exists(&self.index_path())?;
        info!("Cleared {} session(s)", index.len());
        Ok(index.len())
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }

    fn transcript_path(&self, id: &str) -> Result<PathBuf> {
        validate_session_id(id)?;
        Ok(self.root.join(format!("{TRANSCRIPT_PREFIX}{id}.json")))
    }
}

/// Session ids become file names, so only `[A-Za-z0-9_-]` is accepted.
pub fn validate_session_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(anyhow!(DavidError::InvalidSessionId { id: id.to_string() }))
    }
}
