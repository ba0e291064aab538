//! Moves and the reasons a move can be turned away.

use crate::{Cell, Participant};
use serde::{Deserialize, Serialize};

/// A participant's request to claim a cell during a given round.
///
/// The round number lets the engine drop moves that were issued before a
/// reset and arrive afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who is moving.
    pub participant: Participant,
    /// The target cell.
    pub cell: Cell,
    /// Round the move was issued for.
    pub round: u64,
}

impl Move {
    /// Creates a new move.
    pub fn new(participant: Participant, cell: Cell, round: u64) -> Self {
        Self {
            participant,
            cell,
            round,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} (round {})",
            self.participant, self.cell, self.round
        )
    }
}

/// Why an input was ignored.
///
/// Rejections are not errors: out-of-turn clicks and clicks on taken cells
/// are expected and leave the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The first mover was already chosen this round.
    #[display("first mover already chosen")]
    FirstMoverChosen,

    /// No round is accepting moves.
    #[display("no round in progress")]
    NotInProgress,

    /// The move was issued for an earlier round.
    #[display("move for round {_0} arrived after a reset")]
    StaleRound(u64),

    /// The participant does not own the active symbol.
    #[display("it is not {_0}'s turn")]
    NotYourTurn(Participant),

    /// The target cell is already taken.
    #[display("cell {_0} is occupied")]
    CellOccupied(Cell),
}
