//! # DAVID AI Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types shared across the `david` binary.
//! It follows the same two-layer approach everywhere:
//! - `DavidError`: A `thiserror` enum naming the domain failures callers may
//!   want to match on (missing session, bad session id, remote backend errors).
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so that any error can be
//!   propagated with `?` and enriched with `.context(...)`.
//!
//! HTTP-facing errors live next to the router (`commands::serve::api::ApiError`)
//! because they map onto status codes rather than onto domain failures.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(anyhow!(DavidError::SessionNotFound { id: id.to_string() }));
//! }
//!
//! // Detect a specific error further up the stack
//! match store.load(id) {
//!     Err(e) if matches!(e.downcast_ref::<DavidError>(), Some(DavidError::SessionNotFound { .. })) => {
//!         println!("Session is gone, starting a new one...");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Domain errors raised by the `david` binary.
#[derive(Error, Debug)]
pub enum DavidError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Session '{id}' not found.")]
    SessionNotFound { id: String },

    #[error("Invalid session id '{id}': only letters, digits, '-' and '_' are allowed.")]
    InvalidSessionId { id: String },

    #[error("Chat backend returned HTTP {status}: {message}")]
    RemoteStatus { status: u16, message: String },

    #[error("Chat backend request failed: {source}")]
    RemoteTransport {
        #[from]
        source: reqwest::Error,
    },

    #[error("No response from assistant")]
    EmptyReply,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
