//! # chatrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs the
//! real `chatrs` binary inside its own temporary directory, so the default
//! `chat_history.txt` transcript lands somewhere disposable.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Command for the compiled `chatrs` binary.
///
/// ## Panics
/// Panics if the `chatrs` binary cannot be found via `Command::cargo_bin`.
pub fn chatrs_cmd() -> Command {
    Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing")
}

/// `chatrs --no-typing` running in `dir`, isolated from the user's own
/// configuration and environment overrides.
pub fn chat_in(dir: &Path) -> Command {
    let mut cmd = chatrs_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("CHATRS_HISTORY")
        .env_remove("CHATRS_NO_TYPING")
        .env_remove("RUST_LOG")
        .arg("--no-typing");
    cmd
}

/// Lines of the transcript file at `path`.
pub fn transcript_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read transcript")
        .lines()
        .map(str::to_string)
        .collect()
}
