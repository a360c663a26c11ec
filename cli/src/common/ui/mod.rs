//! # chatrs UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! Terminal presentation helpers. Currently this is the typing effect used for
//! the welcome banner and every reply.
//!
//! ```rust
//! use crate::common::ui::typing::Typewriter;
//!
//! Typewriter::from_millis(20).type_line(&mut std::io::stdout(), "Hello!").await?;
//! ```

/// Character-paced output (`Typewriter`).
pub mod typing;
