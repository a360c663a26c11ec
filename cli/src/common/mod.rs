//! # chatrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! Shared utility modules that are not specific to the chatbot rules:
//!
//! - **`fs`**: Filesystem operations (reading config files, appending to the transcript).
//! - **`ui`**: Terminal presentation (the typing effect).
//!
//! Keeping them under `common::` separates cross-cutting helpers from the
//! conversation logic (`bot::`, `session::`) and core infrastructure (`core::`).

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for terminal output.
pub mod ui;
