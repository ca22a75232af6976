//! # DAVID AI Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level `david` command. Each defines its clap arguments
//! and a `handle_*` function that `main.rs` dispatches to.
//!
//! ## Command Groups
//!
//! - `serve`: HTTP service exposing `POST /api/chat`
//! - `ask`: answer a single message
//! - `chat`: interactive chat with persisted sessions
//! - `session`: list, show and delete saved sessions
//! - `temp`: simulated temperature check
//!
//! `store` is not a command; it holds the `--store-dir` arguments shared by
//! every command that touches the session store.
//!

/// One-shot `david ask`.
pub mod ask;
/// Interactive `david chat` and its backends.
pub mod chat;
/// `david serve`: router, config merging, server lifecycle.
pub mod serve;
/// `david session` subcommands (`list`, `show`, `delete`, `clear`).
pub mod session;
/// Shared `--store-dir` handling.
pub mod store;
/// `david temp`.
pub mod temp;
