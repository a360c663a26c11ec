//! # chatrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by the
//! chatbot and the session loop:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ChatError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
