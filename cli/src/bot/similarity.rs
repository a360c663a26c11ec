//! # chatrs Greedy Subsequence Similarity (`bot::similarity`)
//!
//! File: cli/src/bot/similarity.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A deliberately crude score used only to rank FAQ phrases against user input.
//! It is not an edit distance: it counts how many characters of `b` can be found
//! in `a` in order, scanning `a` left to right and never moving backwards.
//! The score is therefore order-sensitive and asymmetric.

/// Minimum score (exclusive) a fuzzy FAQ match must reach.
pub const FAQ_MATCH_THRESHOLD: f64 = 0.4;

/// Scores how much of `b` appears in `a`, in order.
///
/// For each character of `b`, the next occurrence at or after the current
/// position in `a` is searched for; a hit counts as one match and moves the
/// position just past it, a miss leaves the position unchanged. The result is
/// `matches / ((len(a) + len(b)) / 2)`, with lengths in characters after
/// lowercasing. Returns `0.0` when either string is empty.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let mut pos = 0;
    let mut matches = 0usize;
    for ch in &b {
        if let Some(offset) = a[pos..].iter().position(|c| c == ch) {
            matches += 1;
            pos += offset + 1;
        }
    }

    let denom = (a.len() + b.len()) as f64 / 2.0;
    matches as f64 / denom
}
