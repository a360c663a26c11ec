//! # chatrs Input Normalization (`bot::normalize`)
//!
//! File: cli/src/bot/normalize.rs
//! Author: Christi Mahu
//!
//! Input normalization shared by every matcher.

/// Trims surrounding whitespace and lowercases the message.
///
/// Total and idempotent: empty input gives an empty string and normalizing an
/// already-normalized string returns it unchanged.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize("  Who Made You??  "), "who made you??");
        assert_eq!(normalize("\tHELLO\n"), "hello");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    #[test]
    fn idempotent() {
        for raw in ["  Add 4 AND 5 ", "ÉCOLE Time", "", "bye"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
