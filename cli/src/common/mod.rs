//! # DAVID AI Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not specific to any one command. Today this is only
//! filesystem I/O for the session store (`fs`).
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(&store_dir)?;
//! let index: Option<Vec<SessionSummary>> = io::read_json(&index_path)?;
//! ```
//!
pub mod fs;
