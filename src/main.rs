//! Clicktoe - terminal tic-tac-toe against a random bot.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use clicktoe::{Cli, run_tui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    run_tui(settings).await
}
