//! # chatrs Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the chatrs CLI, a small
//! rule-based chatbot. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and starting the interactive session
//!
//! ## Architecture
//!
//! - `bot`: turns one line of input into one reply (rules, FAQ, arithmetic)
//! - `session`: the read-respond loop, interrupt handling and the transcript
//! - `core`: configuration and error types
//! - `common`: filesystem and terminal helpers
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting (transcript goes to ./chat_history.txt)
//! chatrs
//!
//! # Write the transcript elsewhere and print replies instantly
//! chatrs --history ~/notes/chat.txt --no-typing
//!
//! # Show diagnostics on stderr
//! chatrs -vv
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod bot;
mod common;
mod core;
mod session;

use crate::core::config::{self, Overrides};
use crate::core::error::Result;

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatrs",
    about = "🤖 chatrs: a tiny rule-based chatbot for your terminal",
    long_about = "Chat with a small rule-based bot: greetings, the time, simple math and a few FAQs.\n\
                  Every exchange is appended to a transcript file. Type 'bye' to leave.",
    version
)]
struct Cli {
    /// Transcript file to append the conversation to.
    #[arg(long, value_name = "PATH", env = "CHATRS_HISTORY")]
    history: Option<PathBuf>,

    /// Do not write a transcript.
    #[arg(long, conflicts_with = "history")]
    no_history: bool,

    /// Print replies instantly instead of typing them out.
    #[arg(long, env = "CHATRS_NO_TYPING")]
    no_typing: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            history: self.history.clone(),
            no_history: self.no_history,
            no_typing: self.no_typing,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(&cli));
    // An interrupt can leave the blocking stdin read pending; do not wait for it.
    runtime.shutdown_background();

    if let Err(e) = result {
        tracing::error!("chatrs failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let cfg = config::load_config(&cli.overrides())?;
    let transcript = session::Transcript::from_config(&cfg.transcript);
    tracing::info!("Starting chatbot, transcript: {:?}", transcript.path());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut chat = session::Session::new(
        bot::Chatbot::default(),
        transcript,
        &cfg.typing,
        std::io::stdout(),
    );
    chat.run(stdin, session::interrupt_signal()).await?;
    Ok(())
}
