//! # Session History Commands
//!
//! File: cli/src/commands/session/mod.rs
//!
//! ## Overview
//!
//! `david session ...` manages the chats saved by `david chat`:
//!
//! ```bash
//! david session list             # most recent first
//! david session show <ID>        # full transcript
//! david session delete <ID>...   # remove one or more sessions
//! david session clear --yes      # remove every session
//! ```
//!
//! All subcommands accept `--store-dir` (or `DAVID_STORE_DIR`).
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `david session clear`.
mod clear;
/// Implements `david session delete`.
mod delete;
/// Implements `david session list`.
mod list;
/// Implements `david session show`.
mod show;

#[derive(Parser, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// List saved sessions, most recently used first.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Print the transcript of a session.
    Show(show::ShowArgs),
    /// Delete one or more sessions.
    #[command(alias = "rm")]
    Delete(delete::DeleteArgs),
    /// Delete every saved session.
    Clear(clear::ClearArgs),
}

/// # Handle Session Command Group (`handle_session`)
///
/// Dispatches to the selected `david session` subcommand.
pub async fn handle_session(args: SessionArgs) -> Result<()> {
    match args.command {
        SessionCommand::List(list_args) => list::handle_list(list_args).await,
        SessionCommand::Show(show_args) => show::handle_show(show_args).await,
        SessionCommand::Delete(delete_args) => delete::handle_delete(delete_args).await,
        SessionCommand::Clear(clear_args) => clear::handle_clear(clear_args).await,
    }
}
