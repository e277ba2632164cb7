//! # Tarstats Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional configuration file that supplies default
//! output settings. The configuration never changes what is counted, only how
//! the report is rendered when the command line says nothing about it.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit path from `--config` or `TARSTATS_CONFIG` (must exist)
//! 2. User-specific `<config dir>/tarstats/config.toml` (optional)
//! 3. Default values defined in the code
//!
//! Command-line flags are applied on top of the loaded values by the CLI
//! driver, see [`OutputConfig::apply_flags`].
//!
//! ## Examples
//!
//! ```toml
//! [output]
//! format = "human"
//! totals = true
//! ```
//!
use crate::core::error::{Result, TarstatsError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report rendering defaults.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Also print the aggregate over all archives.
    #[serde(default)]
    pub totals: bool,
}

/// How each `Stats` is rendered.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key: value` lines with plain integers.
    #[default]
    Text,
    /// `key: value` lines with unit suffixes and thousands separators.
    Human,
    /// One JSON object per line.
    Json,
}

impl OutputConfig {
    /// Overlays command-line flags. A format flag replaces the configured
    /// format; `--totals` can only switch totals on.
    pub fn apply_flags(self, json: bool, human: bool, totals: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else if human {
            OutputFormat::Human
        } else {
            self.format
        };
        OutputConfig {
            format,
            totals: self.totals || totals,
        }
    }
}

const CONFIG_FILENAME: &str = "config.toml";

/// Loads the configuration, honouring an explicit path when one is given.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = expand_path(path);
            if !expanded.is_file() {
                return Err(anyhow!(TarstatsError::Config(format!(
                    "Config file '{}' does not exist.",
                    expanded.display()
                ))));
            }
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "tarstats") {
        let config_path = proj_dirs.config_dir().join(CONFIG_FILENAME);
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

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(TarstatsError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })
}
