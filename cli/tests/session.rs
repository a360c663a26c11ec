//! # chatrs Session Integration Tests
//!
//! File: cli/tests/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives full conversations through the `chatrs` binary with piped stdin and
//! checks both the printed replies and the transcript written to disk.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_end_to_end_conversation() {
    let dir = tempdir().unwrap();

    chat_in(dir.path())
        .write_stdin("hello\ntime\nxyzzy nonsense\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hi! I'm Gambhir Jha 🤖"))
        .stdout(predicate::str::contains("You> Hey! 👋 How can I help you today?"))
        .stdout(predicate::str::is_match(
            r"You> It's \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} \(local time\)\.\n",
        ).unwrap())
        .stdout(predicate::str::contains(
            "You> Sorry, I didn’t understand that. Type 'help' to see what I can do.",
        ))
        .stdout(predicate::str::contains("You> Bye! 👋 Take care."))
        .stdout(predicate::str::ends_with("Session ended. (chat history saved)\n"));

    let lines = transcript_lines(&dir.path().join("chat_history.txt"));
    assert_eq!(lines.len(), 8);
    assert!(lines[0].ends_with(" USER: hello"));
    assert!(lines[2].ends_with(" USER: time"));
    assert!(lines[5].ends_with(
        " BOT: Sorry, I didn’t understand that. Type 'help' to see what I can do."
    ));
    assert!(lines[7].ends_with(" BOT: Bye! 👋 Take care."));

    // Both lines of one exchange carry the same timestamp.
    let stamp = |line: &str| line.split(' ').next().unwrap().to_string();
    assert_eq!(stamp(&lines[0]), stamp(&lines[1]));
}

#[test]
fn test_math_and_faq_replies() {
    let dir = tempdir().unwrap();

    chat_in(dir.path())
        .write_stdin("Add 4 and 5\nsubtract 3 from 10\n7 + 3\nWho made you??\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You> 4 + 5 = 9\n"))
        .stdout(predicate::str::contains("You> 10 - 3 = 7\n"))
        .stdout(predicate::str::contains("You> 7 + 3 = 10\n"))
        .stdout(predicate::str::contains(
            "You> I was created by Gambhir Jha as a simple demo chatbot.\n",
        ));

    // The raw (not normalized) message is what gets logged.
    let lines = transcript_lines(&dir.path().join("chat_history.txt"));
    assert!(lines[0].ends_with(" USER: Add 4 and 5"));
    assert!(lines[6].ends_with(" USER: Who made you??"));
}

#[test]
fn test_blank_lines_are_skipped() {
    let dir = tempdir().unwrap();

    chat_in(dir.path())
        .write_stdin("   \n\n\t\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry").not());

    assert_eq!(transcript_lines(&dir.path().join("chat_history.txt")).len(), 2);
}

#[test]
fn test_farewell_stops_reading() {
    let dir = tempdir().unwrap();

    chat_in(dir.path())
        .write_stdin("goodbye\nhello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help").not());

    assert_eq!(transcript_lines(&dir.path().join("chat_history.txt")).len(), 2);
}

#[test]
fn test_help_lists_capabilities() {
    let dir = tempdir().unwrap();

    chat_in(dir.path())
        .write_stdin("help\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Here’s what I can do:\n- Say hi (hi, hello)\n"))
        .stdout(predicate::str::contains("- Exit: bye / exit\n"));
}

#[test]
fn test_end_of_input_ends_session() {
    let dir = tempdir().unwrap();

    chat_in(dir.path())
        .write_stdin("hi\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session interrupted. Bye!"))
        .stdout(predicate::str::ends_with("Session ended. (chat history saved)\n"));

    // The end-of-input notice is not logged.
    assert_eq!(transcript_lines(&dir.path().join("chat_history.txt")).len(), 2);
}

#[test]
fn test_history_flag_creates_nested_file() {
    let dir = tempdir().unwrap();

    chat_in(dir.path())
        .args(["--history", "logs/today.txt"])
        .write_stdin("hey\nexit\n")
        .assert()
        .success();

    assert!(!dir.path().join("chat_history.txt").exists());
    assert_eq!(transcript_lines(&dir.path().join("logs/today.txt")).len(), 4);
}

#[test]
fn test_no_history_flag_writes_nothing() {
    let dir = tempdir().unwrap();

    chat_in(dir.path())
        .arg("--no-history")
        .write_stdin("hello\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You> Bye! 👋 Take care."));

    assert!(!dir.path().join("chat_history.txt").exists());
}

#[test]
fn test_project_config_sets_transcript_path() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".chatrs.toml"),
        "[transcript]\npath = \"from_config.txt\"\n",
    )
    .unwrap();

    chat_in(dir.path())
        .write_stdin("hello\nbye\n")
        .assert()
        .success();

    assert_eq!(transcript_lines(&dir.path().join("from_config.txt")).len(), 4);
}

#[test]
fn test_invalid_config_fails_before_session() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".chatrs.toml"), "[transcript]\ncolour = \"red\"\n").unwrap();

    chat_in(dir.path())
        .write_stdin("hello\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Hi! I'm").not())
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unwritable_transcript_is_ignored() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blocker"), "not a directory").unwrap();

    // The parent of the transcript is a regular file, so every append fails.
    chat_in(dir.path())
        .args(["--history", "blocker/chat.txt"])
        .write_stdin("what is your name\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You> My name is Gambhir Jha.\n"));
}
