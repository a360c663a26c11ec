//! # chatrs Typing Effect (`common::ui::typing`)
//!
//! File: cli/src/common/ui/typing.rs
//! Author: Christi Mahu
//!
//! Prints text one character at a time with a fixed pause between characters,
//! so replies look like they are being typed. The pause is purely cosmetic.

use crate::core::error::{ChatError, Result};
use std::io::Write;
use std::time::Duration;

/// Character-paced writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typewriter {
    delay: Duration,
}

impl Typewriter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Writes `text` followed by a newline, flushing after every character.
    ///
    /// With a zero delay the text is written in one go.
    pub async fn type_line<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        if self.delay.is_zero() {
            writeln!(out, "{}", text).map_err(ChatError::from)?;
            out.flush().map_err(ChatError::from)?;
            return Ok(());
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())
                .map_err(ChatError::from)?;
            out.flush().map_err(ChatError::from)?;
            tokio::time::sleep(self.delay).await;
        }
        out.write_all(b"\n").map_err(ChatError::from)?;
        out.flush().map_err(ChatError::from)?;
        Ok(())
    }
}
