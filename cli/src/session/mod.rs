//! # chatrs Interactive Session
//!
//! File: cli/src/session/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module runs the read-respond loop. A session is either **running** or
//! **terminated**:
//!
//! 1. The welcome banner is typed out and the session is running.
//! 2. Each turn prints `You> ` and reads one line. Blank lines are skipped
//!    without a reply or a transcript entry.
//! 3. Anything else goes through `Chatbot::respond`; the reply is typed out and
//!    the exchange is appended to the transcript.
//! 4. A farewell reply terminates the session after it has been logged.
//! 5. An interrupt (Ctrl+C, or SIGTERM on Unix) terminates the session at any
//!    point with a short notice that is not logged. End of input is treated
//!    the same way.
//!
//! ## Architecture
//!
//! The whole conversation is a single future raced against the interrupt
//! future with `tokio::select!`, so an interrupt also cuts off a reply that is
//! still being typed. Input and output are generic, which lets tests drive a
//! session from a byte slice into a `Vec<u8>`.
//!
//! ```rust
//! let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//! let mut session = Session::new(Chatbot::default(), transcript, &cfg.typing, std::io::stdout());
//! session.run(stdin, session::interrupt_signal()).await?;
//! ```
//!
use crate::bot::Chatbot;
use crate::common::ui::typing::Typewriter;
use crate::core::config::TypingConfig;
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info};

pub mod transcript;

pub use transcript::Transcript;

const PROMPT: &str = "You> ";
const INTERRUPTED_NOTICE: &str = "\nSession interrupted. Bye!";
const SESSION_ENDED: &str = "Session ended. (chat history saved)";

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The user said goodbye.
    Farewell,
    /// Ctrl+C or SIGTERM.
    Interrupted,
    /// Input was closed.
    EndOfInput,
}

/// One interactive conversation writing to `W`.
pub struct Session<W: Write> {
    bot: Chatbot,
    transcript: Transcript,
    reply_typing: Typewriter,
    banner_typing: Typewriter,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(bot: Chatbot, transcript: Transcript, typing: &TypingConfig, out: W) -> Self {
        Self {
            bot,
            transcript,
            reply_typing: Typewriter::from_millis(typing.reply_delay_ms),
            banner_typing: Typewriter::from_millis(typing.banner_delay_ms),
            out,
        }
    }

    /// Runs the session until farewell, interrupt or end of input.
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures (reading `input` or writing the output) are
    /// returned. Transcript failures are never surfaced.
    pub async fn run<R, S>(&mut self, input: R, interrupt: S) -> Result<Termination>
    where
        R: AsyncBufRead + Unpin,
        S: Future<Output = ()>,
    {
        let termination = tokio::select! {
            biased;
            _ = interrupt => Termination::Interrupted,
            result = self.converse(input) => result?,
        };
        info!("Session terminated: {:?}", termination);

        if termination != Termination::Farewell {
            self.reply_typing
                .type_line(&mut self.out, INTERRUPTED_NOTICE)
                .await?;
        }
        writeln!(self.out, "{}", SESSION_ENDED).map_err(ChatError::from)?;
        self.out.flush().map_err(ChatError::from)?;
        Ok(termination)
    }

    async fn converse<R>(&mut self, input: R) -> Result<Termination>
    where
        R: AsyncBufRead + Unpin,
    {
        self.banner_typing
            .type_line(&mut self.out, &self.bot.welcome())
            .await?;

        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines
                .next_line()
                .await
                .context("Failed to read a line of input")?
            else {
                return Ok(Termination::EndOfInput);
            };

            let raw = line.trim();
            if raw.is_empty() {
                debug!("Blank input, prompting again");
                continue;
            }

            let reply = self.bot.respond(raw);
            let typing = if reply.is_fast_paced() {
                self.banner_typing
            } else {
                self.reply_typing
            };
            typing.type_line(&mut self.out, &reply.text).await?;
            self.transcript.record(raw, &reply.text);

            if reply.ends_session() {
                return Ok(Termination::Farewell);
            }
        }
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{}", PROMPT).map_err(ChatError::from)?;
        self.out.flush().map_err(ChatError::from)?;
        Ok(())
    }
}

/// Resolves when Ctrl+C or (on Unix) SIGTERM is received.
///
/// If a handler cannot be installed the corresponding branch never resolves,
/// so the session simply cannot be interrupted that way.
pub async fn interrupt_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, ending session..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, ending session...");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
