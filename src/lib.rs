//! Clicktoe - mouse-driven terminal tic-tac-toe against a random bot
//!
//! # Architecture
//!
//! - **Rules**: board, win/draw detection and the turn engine live in the
//!   `clicktoe_rules` crate and are re-exported here
//! - **Session**: the event-driven controller and the bot actor
//! - **TUI**: the region registry, renderer and terminal event loop
//!
//! # Example
//!
//! ```no_run
//! use clicktoe::{Settings, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! run_tui(Settings::default().with_bot_delay_ms(500)).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;
pub mod tui;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ConfigError, Settings};

// Crate-level exports - Session
pub use session::{
    BotHandle, BotTurn, Control, Session, SessionError, SessionEvent, SessionRng, pick_cell,
};

// Crate-level exports - Terminal front end
pub use tui::{Region, RegionId, RegionMap, Tone, run_tui};

// Crate-level exports - Game rules
pub use clicktoe_rules::{
    Board, BoardError, Cell, CellSet, Move, Outcome, Participant, Phase, Rejection, Symbol, Turn,
    TurnEngine,
};
