//! Turn engine: the round state machine.
//!
//! ```text
//! AwaitingFirstChoice --choose_first--> InProgress --win/draw--> RoundOver
//!          ^                                                        |
//!          +------------------------- reset ------------------------+
//! ```
//!
//! The engine owns the board and the whose-turn flag. Anything that is not
//! a legal move for the participant on turn comes back as
//! [`Turn::Ignored`] and leaves the state untouched.

use crate::invariants::assert_invariants;
use crate::rules::{is_draw, winning_pattern};
use crate::{Board, BoardError, Move, Outcome, Participant, Phase, Rejection, Symbol};
use tracing::{debug, info, instrument};

/// Result of submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The move was not legal right now; nothing changed.
    Ignored(Rejection),
    /// The move was applied and the round continues.
    Next {
        /// Symbol that was just placed.
        placed: Symbol,
        /// Participant to signal next.
        next: Participant,
    },
    /// The move was applied and ended the round.
    Over {
        /// Symbol that was just placed.
        placed: Symbol,
        /// How the round ended.
        outcome: Outcome,
    },
}

/// Round state machine holding the board, the active symbol and the phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnEngine {
    board: Board,
    phase: Phase,
    first_mover: Option<Participant>,
    active: Symbol,
    round: u64,
    outcome: Option<Outcome>,
}

impl TurnEngine {
    /// Creates an engine waiting for the first-mover choice of round 1.
    pub fn new() -> Self {
        Self::for_round(1)
    }

    fn for_round(round: u64) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingFirstChoice,
            first_mover: None,
            active: Symbol::X,
            round,
            outcome: None,
        }
    }

    /// Records who moves first and opens the round.
    ///
    /// The first mover plays X. Returns the participant to signal, or the
    /// reason the choice was ignored.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn choose_first(&mut self, who: Participant) -> Result<Participant, Rejection> {
        if self.phase != Phase::AwaitingFirstChoice {
            debug!(phase = ?self.phase, "Ignoring first-mover choice");
            return Err(Rejection::FirstMoverChosen);
        }
        self.first_mover = Some(who);
        self.phase = Phase::InProgress;
        info!(first = %who, "Round started");
        Ok(who)
    }

    /// Checks a move without applying it.
    pub fn validate(&self, mv: &Move) -> Result<(), Rejection> {
        if mv.round != self.round {
            return Err(Rejection::StaleRound(mv.round));
        }
        if self.phase != Phase::InProgress {
            return Err(Rejection::NotInProgress);
        }
        if self.to_move() != Some(mv.participant) {
            return Err(Rejection::NotYourTurn(mv.participant));
        }
        if !self.board.is_free(mv.cell) {
            return Err(Rejection::CellOccupied(mv.cell));
        }
        Ok(())
    }

    /// Validates and applies a move, then checks for a win or a draw.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] only if the board refuses a move that passed
    /// validation, which means the single-writer discipline was broken.
    #[instrument(skip(self), fields(round = self.round, active = %self.active))]
    pub fn submit(&mut self, mv: Move) -> Result<Turn, BoardError> {
        if let Err(rejection) = self.validate(&mv) {
            debug!(%rejection, "Ignoring move");
            return Ok(Turn::Ignored(rejection));
        }

        let placed = self.active;
        self.board.apply_move(mv.cell, placed)?;

        let turn = if let Some(pattern) = winning_pattern(self.board.occupied(placed)) {
            let outcome = Outcome::Winner {
                symbol: placed,
                participant: mv.participant,
                pattern,
            };
            self.finish(outcome);
            Turn::Over { placed, outcome }
        } else if is_draw(&self.board) {
            self.finish(Outcome::Draw);
            Turn::Over {
                placed,
                outcome: Outcome::Draw,
            }
        } else {
            self.active = placed.opponent();
            Turn::Next {
                placed,
                next: mv.participant.opponent(),
            }
        };

        assert_invariants(self);
        Ok(turn)
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, turns = self.board.turns(), "Round over");
        self.phase = Phase::RoundOver;
        self.outcome = Some(outcome);
    }

    /// Discards the board and starts the next round awaiting a first mover.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset(&mut self) {
        *self = Self::for_round(self.round + 1);
        info!(round = self.round, "Engine reset");
    }

    /// The participant playing `symbol`, once the first mover is known.
    pub fn owner(&self, symbol: Symbol) -> Option<Participant> {
        self.first_mover.map(|first| match symbol {
            Symbol::X => first,
            Symbol::O => first.opponent(),
        })
    }

    /// The participant allowed to move now, if any.
    pub fn to_move(&self) -> Option<Participant> {
        match self.phase {
            Phase::InProgress => self.owner(self.active),
            Phase::AwaitingFirstChoice | Phase::RoundOver => None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the symbol that moves next.
    pub fn active(&self) -> Symbol {
        self.active
    }

    /// Returns the chosen first mover.
    pub fn first_mover(&self) -> Option<Participant> {
        self.first_mover
    }

    /// Returns the current round number, starting at 1.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Returns how the round ended, once it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}
