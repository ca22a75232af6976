//! # DAVID AI Chat Sessions
//!
//! File: cli/src/session/mod.rs
//!
//! ## Overview
//!
//! Conversations and where they are kept:
//! - `model`: `ChatMessage`, `ChatSession`, `SessionSummary` and title derivation.
//! - `store`: `SessionStore`, a directory of JSON files standing in for browser
//!   local storage (a session index plus one transcript per session).
//!
//! ```rust
//! let store = SessionStore::open(&cfg.store.directory)?;
//! let mut session = store.create_session();
//! session.push(ChatMessage::user("kapan booster?"));
//! session.push(ChatMessage::assistant(responder::classify("kapan booster?")));
//! store.save(&session)?;
//! ```
//!
pub mod model;
pub mod store;

pub use model::{ChatMessage, ChatSession, Role, SessionSummary};
pub use store::SessionStore;
