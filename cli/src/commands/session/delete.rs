//! # Delete Sessions
//!
//! File: cli/src/commands/session/delete.rs
//!
//! Removes sessions by id. Every id is attempted; the command fails if any of
//! them could not be deleted.
//!
use crate::commands::store::StoreArgs;
use crate::core::config::load_config;
use crate::core::error::Result;
use anyhow::anyhow;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// One or more session ids to delete.
    #[arg(required = true, num_args = 1..)]
    ids: Vec<String>,

    #[command(flatten)]
    store: StoreArgs,
}

pub async fn handle_delete(args: DeleteArgs) -> Result<()> {
    info!("Handling session delete command with args: {:?}", args);

    let config = load_config()?;
    let store = args.store.open(&config)?;

    let mut failed = Vec::new();
    for id in &args.ids {
        match store.delete(id) {
            Ok(()) => println!("Deleted session {}", id),
            Err(e) => {
                error!("Failed to delete session {}: {:#}", id, e);
                eprintln!("{}", e);
                failed.push(id.as_str());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(
            "Failed to delete {} of {} session(s): {}",
            failed.len(),
            args.ids.len(),
            failed.join(", ")
        ))
    }
}
