//! # chatrs Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for chatrs, handling loading,
//! merging, validation, and access to configuration data. The configurable surface
//! is small: where the transcript is written (and whether it is written at all),
//! and how fast replies are "typed" to the terminal.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line options and their environment variables (`--history`, `--no-history`, `--no-typing`)
//! 2. Project-specific `.chatrs.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! Paths are expanded (`~` to home directory) and the result is validated
//! before the session starts.
//!
//! ## Examples
//!
//! ```toml
//! [transcript]
//! path = "~/chat_history.txt"
//! enabled = true
//!
//! [typing]
//! reply_delay_ms = 20
//! banner_delay_ms = 5
//! ```
//!
//! ```rust
//! let cfg = config::load_config(&overrides)?;
//! let transcript = Transcript::from_config(&cfg.transcript);
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub transcript: TranscriptConfig,
    #[serde(default)]
    pub typing: TypingConfig,
}

/// Where and whether the conversation transcript is appended.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TranscriptConfig {
    /// Transcript file (can use ~). Relative paths resolve against the working directory.
    #[serde(default = "default_transcript_path")]
    pub path: String,
    /// When false, no transcript lines are written.
    #[serde(default = "default_transcript_enabled")]
    pub enabled: bool,
}

/// Per-character pacing used when printing replies.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TypingConfig {
    /// Delay per character for ordinary replies.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Delay per character for the welcome banner and the help text.
    #[serde(default = "default_banner_delay_ms")]
    pub banner_delay_ms: u64,
}

/// Settings taken from the command line. These win over every file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub history: Option<PathBuf>,
    pub no_history: bool,
    pub no_typing: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            path: default_transcript_path(),
            enabled: default_transcript_enabled(),
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            banner_delay_ms: default_banner_delay_ms(),
        }
    }
}

fn default_transcript_path() -> String {
    "chat_history.txt".to_string()
}
fn default_transcript_enabled() -> bool {
    true
}
fn default_reply_delay_ms() -> u64 {
    20
}
fn default_banner_delay_ms() -> u64 {
    5
}

const PROJECT_CONFIG_FILENAME: &str = ".chatrs.toml";

/// Loads user and project configuration, applies command-line overrides,
/// expands paths and validates the result.
pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    resolve_config(user_config, project_config, overrides)
}

/// Merges already-loaded configuration sources into the final `Config`.
fn resolve_config(
    user: Option<Config>,
    project: Option<Config>,
    overrides: &Overrides,
) -> Result<Config> {
    let mut merged_config = merge_configs(user.unwrap_or_default(), project);
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Chatrs", "chatrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.chatrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.chatrs.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win whenever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.transcript.path = if project_cfg.transcript.path != default_transcript_path() {
        project_cfg.transcript.path
    } else {
        user.transcript.path
    };
    merged.transcript.enabled = if project_cfg.transcript.enabled != default_transcript_enabled()
    {
        project_cfg.transcript.enabled
    } else {
        user.transcript.enabled
    };
    merged.typing.reply_delay_ms = if project_cfg.typing.reply_delay_ms != default_reply_delay_ms()
    {
        project_cfg.typing.reply_delay_ms
    } else {
        user.typing.reply_delay_ms
    };
    merged.typing.banner_delay_ms =
        if project_cfg.typing.banner_delay_ms != default_banner_delay_ms() {
            project_cfg.typing.banner_delay_ms
        } else {
            user.typing.banner_delay_ms
        };
    merged
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(history) = &overrides.history {
        debug!("Transcript path overridden to {}", history.display());
        config.transcript.path = history.to_string_lossy().into_owned();
    }
    if overrides.no_history {
        config.transcript.enabled = false;
    }
    if overrides.no_typing {
        config.typing.reply_delay_ms = 0;
        config.typing.banner_delay_ms = 0;
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.transcript.path = shellexpand::tilde(&config.transcript.path).into_owned();
    debug!("Expanded transcript path: {}", config.transcript.path);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if !config.transcript.enabled {
        debug!("Transcript disabled, skipping path validation.");
        return Ok(());
    }
    if config.transcript.path.trim().is_empty() {
        return Err(anyhow!(ChatError::Config(
            "Transcript path cannot be empty.".to_string()
        )));
    }
    let path = PathBuf::from(&config.transcript.path);
    if path.is_dir() {
        return Err(anyhow!(ChatError::Config(format!(
            "Transcript path '{}' is a directory, expected a file.",
            path.display()
        ))));
    }
    Ok(())
}
