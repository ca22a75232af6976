//! # Clear Sessions
//!
//! File: cli/src/commands/session/clear.rs
//!
//! Removes every saved session. Needs `--yes` because it cannot be undone.
//!
use crate::commands::store::StoreArgs;
use crate::core::config::load_config;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Confirm that every session should be deleted.
    #[arg(long, short)]
    yes: bool,

    #[command(flatten)]
    store: StoreArgs,
}

pub async fn handle_clear(args: ClearArgs) -> Result<()> {
    info!("Handling session clear command with args: {:?}", args);

    if !args.yes {
        anyhow::bail!("Refusing to delete all sessions without --yes");
    }

    let config = load_config()?;
    let store = args.store.open(&config)?;
    let removed = store.clear()?;
    println!("Deleted {} session(s) from {}", removed, store.root().display());
    Ok(())
}
