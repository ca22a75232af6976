//! # DAVID AI Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the session store. Callers import the submodule
//! directly (`crate::common::fs::io::write_json_atomic`).
//!
//! - **`io`**: directory creation, JSON read/write (atomic), file removal.
//!
pub mod io;
