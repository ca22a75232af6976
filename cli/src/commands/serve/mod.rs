//! # DAVID AI Chat Server
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! `david serve` exposes the responder over HTTP so a browser UI (or any
//! other client) can talk to it. See `api` for the wire contract.
//!
//! ## Architecture
//!
//! - `config.rs`: merges CLI arguments with the `[server]` config section
//! - `api.rs`: the `/api/chat` route, request validation and error bodies
//! - `server_logic.rs`: router assembly, port fallback, graceful shutdown
//! - `utils.rs`: network address lookup for the startup banner
//!
//! ## Examples
//!
//! ```bash
//! # Listen on localhost:3000
//! david serve
//!
//! # Expose to the LAN and serve a prebuilt UI
//! david serve --host 0.0.0.0 --ui-dir ./web/dist
//! ```
//!
use crate::core::config::load_config;
use crate::core::error::Result;
use tracing::info;

pub use self::config::ServeArgs;

/// CLI/config merging for the server.
pub mod config;

/// The JSON chat endpoint.
pub mod api;

/// Axum server setup and lifecycle.
pub mod server_logic;

/// Startup banner helpers.
pub mod utils;

/// # Handle Serve Command (`handle_serve`)
///
/// Loads the configuration files, merges them with `args` and runs the server
/// until it is interrupted.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let file_config = load_config()?;
    let server_config = config::load_and_merge_config(args, &file_config).await?;
    info!("Effective server config: {:?}", server_config);

    server_logic::run_server(server_config).await
}
