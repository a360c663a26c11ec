//! # chatrs Rule Matchers (`bot::matchers`)
//!
//! File: cli/src/bot/matchers.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The ordered dispatch list. Each matcher inspects the normalized message and
//! either produces reply text or declines. [`MATCHERS`] is evaluated top to
//! bottom and the first reply wins, so the order here is the priority order:
//! exit, help, greeting, time, arithmetic, FAQ. When all decline, the caller
//! uses [`FALLBACK_REPLY`].

use super::{arithmetic, faq, ReplyKind};
use chrono::{Local, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

pub const FAREWELL_REPLY: &str = "Bye! 👋 Take care.";
pub const GREETING_REPLY: &str = "Hey! 👋 How can I help you today?";
pub const FALLBACK_REPLY: &str =
    "Sorry, I didn’t understand that. Type 'help' to see what I can do.";
pub const HELP_REPLY: &str = "Here’s what I can do:\n\
    - Say hi (hi, hello)\n\
    - Tell time (time)\n\
    - Math: add 4 and 5 / 7 + 3\n\
    - Math: subtract 10 and 3 / 10 - 3\n\
    - FAQs: who made you, version\n\
    - Exit: bye / exit\n";

static RE_EXIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(bye|exit|quit|goodbye)\b").unwrap());
static RE_HELP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bhelp\b").unwrap());
static RE_GREETING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(hi|hello|hey|yo|hiya)\b").unwrap());
static RE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(time|what(?:'s| is) the time|current time)\b").unwrap()
});

/// One rule in the dispatch list.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    pub kind: ReplyKind,
    pub respond: fn(&str) -> Option<String>,
}

/// Priority-ordered rules. The first `Some` wins.
pub static MATCHERS: [Matcher; 6] = [
    Matcher {
        kind: ReplyKind::Farewell,
        respond: exit,
    },
    Matcher {
        kind: ReplyKind::Help,
        respond: help,
    },
    Matcher {
        kind: ReplyKind::Greeting,
        respond: greeting,
    },
    Matcher {
        kind: ReplyKind::Time,
        respond: time,
    },
    Matcher {
        kind: ReplyKind::Arithmetic,
        respond: arithmetic::evaluate,
    },
    Matcher {
        kind: ReplyKind::Faq,
        respond: faq_answer,
    },
];

pub fn exit(msg: &str) -> Option<String> {
    RE_EXIT
        .is_match(msg)
        .then(|| FAREWELL_REPLY.to_string())
}

pub fn help(msg: &str) -> Option<String> {
    RE_HELP.is_match(msg).then(|| HELP_REPLY.to_string())
}

pub fn greeting(msg: &str) -> Option<String> {
    RE_GREETING
        .is_match(msg)
        .then(|| GREETING_REPLY.to_string())
}

pub fn time(msg: &str) -> Option<String> {
    RE_TIME
        .is_match(msg)
        .then(|| time_reply(Local::now().naive_local()))
}

/// `It's YYYY-MM-DD HH:MM:SS (local time).`
pub fn time_reply(now: NaiveDateTime) -> String {
    format!("It's {} (local time).", now.format("%Y-%m-%d %H:%M:%S"))
}

fn faq_answer(msg: &str) -> Option<String> {
    faq::lookup(msg).map(str::to_string)
}
