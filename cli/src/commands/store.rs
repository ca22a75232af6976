//! # Session Store Arguments
//!
//! File: cli/src/commands/store.rs
//!
//! ## Overview
//!
//! Every command that reads or writes chat sessions (`chat`, `temp`,
//! `session ...`) flattens [`StoreArgs`] into its own arguments, so the store
//! location is chosen the same way everywhere:
//!
//! 1. `--store-dir <DIR>` or the `DAVID_STORE_DIR` environment variable
//! 2. `[store] directory` from the loaded configuration
//! 3. `~/.david/sessions`
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::session::SessionStore;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Directory holding chat sessions. Overrides `[store] directory` from the config.
    #[arg(long, value_name = "DIR", env = "DAVID_STORE_DIR")]
    pub store_dir: Option<PathBuf>,
}

impl StoreArgs {
    /// The directory the store should live in, after `~` expansion.
    pub fn resolve_dir(&self, config: &Config) -> PathBuf {
        match &self.store_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned()),
            None => PathBuf::from(&config.store.directory),
        }
    }

    /// Opens the session store, creating its directory if needed.
    pub fn open(&self, config: &Config) -> Result<SessionStore> {
        let dir = self.resolve_dir(config);
        debug!("Using session store directory: {}", dir.display());
        SessionStore::open(&dir)
            .with_context(|| format!("Failed to open session store at {}", dir.display()))
    }
}
