//! # chatrs FAQ Table (`bot::faq`)
//!
//! File: cli/src/bot/faq.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Four canonical questions with fixed answers. Lookup first tries a literal
//! occurrence of a canonical phrase anywhere in the message, then falls back to
//! ranking every phrase with [`similarity`](super::similarity::similarity).

use super::similarity::{similarity, FAQ_MATCH_THRESHOLD};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Canonical phrase → answer. Order breaks ties in fuzzy ranking.
pub static FAQS: &[(&str, &str)] = &[
    (
        "who made you",
        "I was created by Gambhir Jha as a simple demo chatbot.",
    ),
    ("what is your name", "My name is Gambhir Jha."),
    ("version", "This is v0.1-alpha (handmade, not perfect)."),
    (
        "what can you do",
        "I can chat, do basic math, tell time, and answer a few FAQs.",
    ),
];

static RE_FAQ_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(who made you|what is your name|version|what can you do)").unwrap()
});

/// Answers a message from the FAQ table, exact phrase first, fuzzy second.
pub fn lookup(msg: &str) -> Option<&'static str> {
    exact_answer(msg).or_else(|| fuzzy_answer(msg))
}

/// Answer for the leftmost canonical phrase occurring literally in `msg`.
pub fn exact_answer(msg: &str) -> Option<&'static str> {
    let phrase = RE_FAQ_PHRASE.find(msg)?.as_str().to_lowercase();
    answer_for(&phrase)
}

/// Answer whose phrase scores best against `msg`, if it clears the threshold.
pub fn fuzzy_answer(msg: &str) -> Option<&'static str> {
    let (answer, score) = best_match(msg)?;
    (score > FAQ_MATCH_THRESHOLD).then_some(answer)
}

/// Best-scoring (answer, score) pair; earlier entries win ties.
/// `None` when nothing scores above zero.
pub fn best_match(msg: &str) -> Option<(&'static str, f64)> {
    let mut best: Option<(&'static str, f64)> = None;
    for (question, answer) in FAQS {
        let score = similarity(question, msg);
        trace!("FAQ '{}' scored {:.3}", question, score);
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((*answer, score));
        }
    }
    best
}

fn answer_for(phrase: &str) -> Option<&'static str> {
    FAQS.iter()
        .find(|(question, _)| *question == phrase)
        .map(|(_, answer)| *answer)
}
