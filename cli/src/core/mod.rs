//! # DAVID AI Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `protocol`: JSON bodies of the `/api/chat` exchange
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{DavidError, Result};
//! use crate::core::protocol::{ChatRequest, ChatResponse};
//! ```
//!
pub mod config;
pub mod error;
pub mod protocol;
