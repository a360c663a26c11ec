//! # chatrs Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! Filesystem helpers used by configuration loading and the transcript logger.
//! Import from the submodule directly, e.g. `crate::common::fs::io::append_string_to_file`.

/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `append_string_to_file`).
pub mod io;
