//! # chatrs Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! This module centralizes the filesystem input/output operations chatrs needs:
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and checks that an existing path is a directory.
//! - **`read_file_to_string`**: A wrapper around `fs::read_to_string` that adds context to I/O errors. Used by configuration loading.
//! - **`append_string_to_file`**: Appends text to a file, creating the file and its parent directory when needed. Used by the transcript logger.
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! io::append_string_to_file(Path::new("logs/chat_history.txt"), "line\n")?;
//! let content = io::read_file_to_string(Path::new("logs/chat_history.txt"))?;
//! ```
//!
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, the directory is created including any missing
/// parents (similar to `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ChatError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read,
/// with context indicating which file failed.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Appends `content` to the file at `path`.
///
/// The parent directory is created first when it is missing, and the file is
/// created when it does not exist yet. The handle is closed before returning,
/// so no file stays open between calls.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the file
/// cannot be opened or written.
pub fn append_string_to_file(path: &Path, content: &str) -> Result<()> {
    // A bare file name has an empty parent, which is the working directory.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {:?} for appending", path))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to append to file {:?}", path))?;
    debug!("Appended {} bytes to {:?}", content.len(), path);
    Ok(())
}
