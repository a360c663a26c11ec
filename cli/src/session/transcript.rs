//! # Conversation Transcript
//!
//! File: cli/src/session/transcript.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Appends every answered turn to a plain text file as two lines sharing one
//! timestamp:
//!
//! ```text
//! 2024-03-07T09:05:02.123456 USER: Add 4 and 5
//! 2024-03-07T09:05:02.123456 BOT: 4 + 5 = 9
//! ```
//!
//! The file is opened, appended and closed on every call. Writing is
//! best-effort: a failure is reported at debug level and then dropped, so the
//! conversation never stops because the transcript could not be written.
//!
use crate::common::fs::io;
use crate::core::config::TranscriptConfig;
use crate::core::error::Result;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Timestamp layout of each transcript line (ISO-8601, microsecond precision).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Append-only transcript sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    /// Append to the file at this path.
    File(PathBuf),
    /// Transcript logging switched off.
    Disabled,
}

impl Transcript {
    pub fn from_config(config: &TranscriptConfig) -> Self {
        if config.enabled {
            Transcript::File(PathBuf::from(&config.path))
        } else {
            Transcript::Disabled
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Transcript::File(path) => Some(path.as_path()),
            Transcript::Disabled => None,
        }
    }

    /// Records one exchange. Errors are discarded after a debug message.
    pub fn record(&self, user_msg: &str, bot_msg: &str) {
        if let Err(e) = self.try_record(user_msg, bot_msg, Local::now().naive_local()) {
            // Best-effort: a transcript failure must not interrupt the chat.
            debug!("Discarding transcript write failure: {:#}", e);
        }
    }

    /// Appends the USER and BOT lines stamped with `at`.
    pub fn try_record(&self, user_msg: &str, bot_msg: &str, at: NaiveDateTime) -> Result<()> {
        let Transcript::File(path) = self else {
            return Ok(());
        };
        io::append_string_to_file(path, &format_entry(user_msg, bot_msg, at))
    }
}

fn format_entry(user_msg: &str, bot_msg: &str, at: NaiveDateTime) -> String {
    let ts = at.format(TIMESTAMP_FORMAT);
    format!("{ts} USER: {user_msg}\n{ts} BOT: {bot_msg}\n")
}
