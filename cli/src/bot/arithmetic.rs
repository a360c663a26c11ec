//! # chatrs Arithmetic Phrasing (`bot::arithmetic`)
//!
//! File: cli/src/bot/arithmetic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Recognizes three ways of asking for integer addition or subtraction, tried
//! in order: keyword addition ("add 4 and 5"), keyword subtraction
//! ("subtract 3 from 10") and a bare infix expression ("7 + 3").
//!
//! Operands are `i64` written with ASCII digits. A number that does not fit,
//! or a result that overflows, makes the rule not match rather than fail. A
//! run of digits is always read as one operand, so "10 + 20" is never split
//! into 2 and 0: between keyword operands there must be a separator
//! (`and`, `from`, `,`), whitespace, or a sign on the second operand.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// Groups: 1 = first operand; 2, 3 or 4 = second operand after a word
// separator, after whitespace, or directly with its sign.
static RE_ADD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:add|sum|plus|\+)\s*(?:of)?\s*([+-]?[0-9]+)(?:\s*(?:and|,)\s*([+-]?[0-9]+)|\s+([+-]?[0-9]+)|([+-][0-9]+))",
    )
    .unwrap()
});

static RE_SUB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:subtract|minus|less)\s*([+-]?[0-9]+)(?:\s*(?:and|from|,)\s*([+-]?[0-9]+)|\s+([+-]?[0-9]+)|([+-][0-9]+))",
    )
    .unwrap()
});

static RE_INFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-]?[0-9]+)\s*([+\-])\s*([+-]?[0-9]+)").unwrap());

/// Tries addition, subtraction and infix phrasing, in that order.
pub fn evaluate(msg: &str) -> Option<String> {
    addition(msg)
        .or_else(|| subtraction(msg))
        .or_else(|| infix(msg))
}

/// "add 4 and 5", "sum of 3, 4", "plus -2 7" → `"{a} + {b} = {sum}"`.
pub fn addition(msg: &str) -> Option<String> {
    let caps = RE_ADD.captures(msg)?;
    let (a, b) = (operand(&caps, 1)?, second_operand(&caps)?);
    Some(format!("{} + {} = {}", a, b, a.checked_add(b)?))
}

/// "subtract 10 and 3" → `10 - 3 = 7`.
///
/// When the message contains "from" anywhere, the operands are swapped:
/// "subtract 3 from 10" → `10 - 3 = 7`.
pub fn subtraction(msg: &str) -> Option<String> {
    let caps = RE_SUB.captures(msg)?;
    let (a, b) = (operand(&caps, 1)?, second_operand(&caps)?);
    let (lhs, rhs) = if msg.contains("from") { (b, a) } else { (a, b) };
    Some(format!("{} - {} = {}", lhs, rhs, lhs.checked_sub(rhs)?))
}

/// "7 + 3", "12-5" → `"{a} {op} {b} = {result}"`.
pub fn infix(msg: &str) -> Option<String> {
    let caps = RE_INFIX.captures(msg)?;
    let (a, b) = (operand(&caps, 1)?, operand(&caps, 3)?);
    let op = &caps[2];
    let result = if op == "+" {
        a.checked_add(b)?
    } else {
        a.checked_sub(b)?
    };
    Some(format!("{} {} {} = {}", a, op, b, result))
}

fn operand(caps: &Captures<'_>, group: usize) -> Option<i64> {
    caps.get(group)?.as_str().parse().ok()
}

fn second_operand(caps: &Captures<'_>) -> Option<i64> {
    (2..=4).find_map(|group| operand(caps, group))
}
