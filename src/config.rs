//! Configuration file handling.
//!
//! The configuration lives at `$PROGGY_CONFIG` if set, otherwise at
//! `<config dir>/proggy/config.toml`:
//!
//! ```toml
//! [bar]
//! size = 40
//! total = 100
//! characters = "braille"   # preset name or a literal ramp like "-#"
//!
//! [console]
//! max_query_attempts = 50  # omit to retry forever
//!
//! [logging]
//! level = "warn"
//! file = "/tmp/proggy.log" # omit to disable logging
//! ```
//!
//! Every section and field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bar::{ProgressError, Ramp};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PROGGY_CONFIG";

/// Errors while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Could not determine the config directory")]
    NoConfigDir,
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bar: BarConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

/// Defaults for bars created by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub size: usize,
    pub total: u64,
    /// Preset name or literal ramp
    pub characters: String,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            size: 40,
            total: 100,
            characters: "braille".to_string(),
        }
    }
}

impl BarConfig {
    /// Resolve `characters` into a ramp.
    pub fn ramp(&self) -> Result<Ramp, ProgressError> {
        Ramp::from_spec(&self.characters)
    }
}

/// Console driver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Give up on cursor queries after this many malformed responses.
    /// `None` retries forever.
    pub max_query_attempts: Option<u32>,
}

/// Logging settings. Logs never go to the terminal the bars are drawn on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `proggy=debug`
    pub level: String,
    /// Log file; logging is disabled when unset
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("proggy").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults if the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
