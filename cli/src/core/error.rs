//! # chatrs Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout chatrs. The conversation
//! itself has almost no failure modes: unparseable arithmetic is simply "no match"
//! and transcript write failures are discarded. What remains are configuration
//! problems detected at startup and terminal output failures.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ChatError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if path.is_dir() {
//!     anyhow::bail!(ChatError::Config(format!("{} is a directory", path.display())));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the chatrs application.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Terminal output failed: {source}")]
    Terminal {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = ChatError::Config("Transcript path cannot be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Transcript path cannot be empty"
        );

        let fs_err = ChatError::FileSystem("Path exists but is not a directory".into());
        assert_eq!(
            fs_err.to_string(),
            "Filesystem error: Path exists but is not a directory"
        );

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let terminal: ChatError = io.into();
        assert_eq!(terminal.to_string(), "Terminal output failed: pipe closed");
    }
}
