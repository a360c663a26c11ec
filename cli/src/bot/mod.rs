//! # chatrs Conversation Rules (`bot`)
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module turns one line of user input into one reply. It has no memory
//! between turns: the same input always takes the same path through the rules.
//!
//! ## Architecture
//!
//! - `normalize`: trims and lowercases the raw line
//! - `matchers`: the priority-ordered dispatch list (exit, help, greeting, time, arithmetic, FAQ)
//! - `arithmetic`: integer addition/subtraction phrasing
//! - `faq`: the FAQ table with exact and fuzzy lookup
//! - `similarity`: the greedy subsequence score used for fuzzy FAQ lookup
//!
//! `Chatbot::respond` normalizes the input, walks `matchers::MATCHERS` and
//! returns the first reply, or the fallback when nothing matched.
//!
//! ```rust
//! let bot = Chatbot::default();
//! let reply = bot.respond("Add 4 and 5");
//! assert_eq!(reply.text, "4 + 5 = 9");
//! assert!(!reply.ends_session());
//! ```
//!
use tracing::debug;

pub mod arithmetic;
pub mod faq;
pub mod matchers;
pub mod normalize;
pub mod similarity;

pub use normalize::normalize;

/// Name shown in the welcome banner.
pub const BOT_NAME: &str = "Gambhir Jha";

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Farewell,
    Help,
    Greeting,
    Time,
    Arithmetic,
    Faq,
    Fallback,
}

/// The bot's answer to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
}

impl Reply {
    /// True for the farewell, after which the session ends.
    pub fn ends_session(&self) -> bool {
        self.kind == ReplyKind::Farewell
    }

    /// Long static texts are typed out faster than ordinary replies.
    pub fn is_fast_paced(&self) -> bool {
        self.kind == ReplyKind::Help
    }
}

/// A rule-based responder.
#[derive(Debug, Clone)]
pub struct Chatbot {
    name: String,
}

impl Default for Chatbot {
    fn default() -> Self {
        Self::new(BOT_NAME)
    }
}

impl Chatbot {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Banner printed once when a session starts.
    pub fn welcome(&self) -> String {
        format!(
            "Hi! I'm {} 🤖\nType 'help' to see commands. Type 'bye' to exit.\n",
            self.name
        )
    }

    /// Replies to a raw line of input. Never fails: unmatched input gets the
    /// fallback reply.
    pub fn respond(&self, raw: &str) -> Reply {
        let msg = normalize(raw);
        for matcher in &matchers::MATCHERS {
            if let Some(text) = (matcher.respond)(&msg) {
                debug!("Matched {:?} for {:?}", matcher.kind, msg);
                return Reply {
                    kind: matcher.kind,
                    text,
                };
            }
        }
        debug!("No rule matched {:?}, using fallback", msg);
        Reply {
            kind: ReplyKind::Fallback,
            text: matchers::FALLBACK_REPLY.to_string(),
        }
    }
}
