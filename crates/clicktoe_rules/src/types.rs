//! Core domain types: symbols, participants, phases and round outcomes.

use crate::Cell;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Symbol {
    /// Played by whoever moves first.
    X,
    /// Played by whoever moves second.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// One of the two parties at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Participant {
    /// The person clicking cells.
    #[display("YOU")]
    Human,
    /// The random-move bot.
    #[display("BOT")]
    Bot,
}

impl Participant {
    /// Returns the other participant.
    pub fn opponent(self) -> Self {
        match self {
            Participant::Human => Participant::Bot,
            Participant::Bot => Participant::Human,
        }
    }
}

/// Lifecycle phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Waiting for someone to pick who moves first.
    #[default]
    AwaitingFirstChoice,
    /// Moves are being accepted.
    InProgress,
    /// A win or draw ended the round; only a reset is accepted.
    RoundOver,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A participant completed a winning pattern.
    Winner {
        /// The winning symbol.
        symbol: Symbol,
        /// Who played that symbol.
        participant: Participant,
        /// The completed line.
        pattern: [Cell; 3],
    },
    /// All nine cells filled without a line.
    Draw,
}

impl Outcome {
    /// Returns the winning symbol, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner { symbol, .. } => Some(*symbol),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner {
                symbol,
                participant,
                ..
            } => write!(f, "{} ({}) wins", symbol, participant),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
