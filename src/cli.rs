//! Command-line interface for clicktoe.

use crate::config::{ConfigError, Settings};
use clap::Parser;
use std::path::PathBuf;

/// Clicktoe - mouse-driven tic-tac-toe against a random bot
///
/// Every flag is optional; running without arguments starts a game with
/// default settings.
#[derive(Parser, Debug, Default)]
#[command(name = "clicktoe")]
#[command(about = "Mouse-driven terminal tic-tac-toe against a random bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bot pacing delay in milliseconds
    #[arg(long)]
    pub bot_delay_ms: Option<u64>,

    /// Seed for the bot's random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolves settings: the config file (or defaults) with flags on top.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(delay) = self.bot_delay_ms {
            settings = settings.with_bot_delay_ms(delay);
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(log_file) = &self.log_file {
            settings = settings.with_log_file(log_file.clone());
        }
        Ok(settings)
    }
}
