//! Pure tic-tac-toe round logic for clicktoe.
//!
//! - [`Board`]: occupied cells per symbol and the free cells
//! - [`rules`]: win and draw detection
//! - [`TurnEngine`]: first-mover choice, turn ownership, round lifecycle
//!
//! Nothing here blocks or spawns; the session layer drives the engine from a
//! single task.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod engine;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Move, Rejection};
pub use board::{Board, BoardError};
pub use cell::{Cell, CellSet};
pub use engine::{Turn, TurnEngine};
pub use rules::{WINNING_PATTERNS, check_winner, winning_pattern};
pub use types::{Outcome, Participant, Phase, Symbol};
