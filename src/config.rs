//! Runtime settings: bot pacing, RNG seed and log destination.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a clicktoe session.
///
/// Every field has a default, so an empty TOML file (or no file at all)
/// yields a playable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", strip_option)]
pub struct Settings {
    /// Pause before the bot submits its move, in milliseconds.
    #[serde(default = "default_bot_delay_ms")]
    bot_delay_ms: u64,

    /// Seed for the process-wide random source. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// File receiving log output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default `tracing` filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_bot_delay_ms() -> u64 {
    1000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("clicktoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot_delay_ms: default_bot_delay_ms(),
            seed: None,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(bot_delay_ms = settings.bot_delay_ms, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The bot pacing delay.
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
