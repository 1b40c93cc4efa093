//! # Chatrs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! chatrs runs with no configuration at all: the built-in pattern table and
//! the default bot name are used. A TOML file can be supplied with
//! `--config <FILE>` to rename the bot or to replace the pattern table and
//! fallback replies. No file is read unless one is named explicitly.
//!
//! ## Format
//!
//! ```toml
//! bot_name = "Ferris"
//! # Top-level keys must come before the [[patterns]] tables.
//! fallback = ["Tell me more.", "Go on..."]
//!
//! [[patterns]]
//! key = "coffee"
//! replies = ["Espresso or latte?", "It's {now:%H:%M}, a bit late for coffee."]
//!
//! [[patterns]]
//! key = "tea"
//! replies = ["Green or black?"]
//! ```
//!
//! `patterns`, when present, replaces the whole built-in table and keeps the
//! file's order. `fallback`, when present, replaces the built-in fallback list.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let settings = config::load_config(Some("~/chatrs.toml"))?;
//! let bot = Responder::new(&settings.table, &settings.bot_name, rng);
//! ```
//!
use crate::bot::patterns::PatternTable;
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Display name used when neither the config nor `--name` sets one.
pub const DEFAULT_BOT_NAME: &str = "Rusty";

/// Top-level configuration file structure.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The bot's display name.
    pub bot_name: Option<String>,
    /// Replacement pattern table, in matching order.
    pub patterns: Option<Vec<PatternConfig>>,
    /// Replacement fallback replies.
    pub fallback: Option<Vec<String>>,
}

/// What a command runs with once the configuration has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bot_name: String,
    pub table: PatternTable,
}

/// One `[[patterns]]` entry.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    /// Keyword or phrase; matched case-insensitively as a substring.
    pub key: String,
    /// Reply templates; `{name}` and `{now:FMT}` are rendered when chosen.
    pub replies: Vec<String>,
}

impl Config {
    pub fn bot_name(&self) -> &str {
        self.bot_name.as_deref().unwrap_or(DEFAULT_BOT_NAME)
    }

    /// Builds the pattern table this configuration describes.
    pub fn pattern_table(&self) -> Result<PatternTable> {
        let (patterns, fallback) = match (&self.patterns, &self.fallback) {
            (None, None) => return Ok(PatternTable::builtin()),
            (Some(patterns), Some(fallback)) => (to_pairs(patterns), fallback.clone()),
            (Some(patterns), None) => (
                to_pairs(patterns),
                PatternTable::builtin().fallback().as_slice().to_vec(),
            ),
            (None, Some(fallback)) => {
                let builtin = PatternTable::builtin();
                let patterns = builtin
                    .patterns()
                    .iter()
                    .map(|p| (p.key().to_string(), p.replies().as_slice().to_vec()))
                    .collect();
                (patterns, fallback.clone())
            }
        };

        PatternTable::new(patterns, fallback)
            .map_err(|e| anyhow!(ChatError::Config(e.to_string())))
    }
}

fn to_pairs(patterns: &[PatternConfig]) -> Vec<(String, Vec<String>)> {
    patterns
        .iter()
        .map(|p| (p.key.clone(), p.replies.clone()))
        .collect()
}

/// Loads and validates the configuration, returning the settings to run with.
///
/// With no path the defaults are used and nothing is read from disk.
pub fn load_config(path: Option<&str>) -> Result<Settings> {
    let config = match path {
        Some(raw) => {
            let path = expand_config_path(raw);
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            debug!("No configuration file given, using built-in defaults.");
            Config::default()
        }
    };
    debug!("Loaded configuration: {:?}", config);
    validate_config(&config).context("Configuration validation failed")
}

fn expand_config_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn validate_config(config: &Config) -> Result<Settings> {
    if let Some(name) = &config.bot_name {
        if name.trim().is_empty() {
            return Err(anyhow!(ChatError::Config(
                "bot_name cannot be empty.".to_string()
            )));
        }
    }
    Ok(Settings {
        bot_name: config.bot_name().to_string(),
        table: config.pattern_table()?,
    })
}
