//! Application configuration loading from config.toml
//!
//! This module provides functionality to load widget tuning values from a TOML
//! configuration file. The file is optional: a missing config.toml falls back to
//! the built-in defaults, while a malformed one is a startup error so typos do
//! not silently vanish.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default simulated generation delay in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Token generation tuning
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Tuning for the simulated token generation
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Artificial delay before a token "arrives", in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

const fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

/// Loads application configuration from a TOML file.
///
/// # Returns
/// * `Ok(AppConfig)` - Parsed configuration, or defaults if the file does not exist
/// * `Err(Error)` - The file exists but cannot be read or parsed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {path:?}: {e}"),
    })
}

/// Loads application configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<AppConfig> {
    load_config("config.toml")
}
