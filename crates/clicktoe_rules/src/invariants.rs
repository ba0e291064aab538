//! Invariants that hold for every reachable engine state.
//!
//! The engine asserts them after each accepted move in debug builds; tests
//! call [`violations`] directly.

use crate::rules::check_winner;
use crate::{Phase, Symbol, TurnEngine};
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// X, O and free cells partition the grid.
pub struct PartitionInvariant;

impl Invariant<TurnEngine> for PartitionInvariant {
    fn holds(engine: &TurnEngine) -> bool {
        engine.board().is_partitioned()
    }

    fn description() -> &'static str {
        "X, O and free cells partition cells 1-9"
    }
}

/// The turn counter equals the number of claimed cells and stays within 0-9.
pub struct TurnCountInvariant;

impl Invariant<TurnEngine> for TurnCountInvariant {
    fn holds(engine: &TurnEngine) -> bool {
        let board = engine.board();
        let claimed = board.occupied(Symbol::X).len() + board.occupied(Symbol::O).len();
        board.turns() <= 9 && usize::from(board.turns()) == claimed
    }

    fn description() -> &'static str {
        "Turn counter matches claimed cells and never exceeds 9"
    }
}

/// X and O alternate, X first, so X is never behind O or more than one ahead.
pub struct AlternationInvariant;

impl Invariant<TurnEngine> for AlternationInvariant {
    fn holds(engine: &TurnEngine) -> bool {
        let board = engine.board();
        let x = board.occupied(Symbol::X).len();
        let o = board.occupied(Symbol::O).len();
        let balanced = x == o || x == o + 1;
        let active_matches = match engine.phase() {
            Phase::InProgress | Phase::AwaitingFirstChoice => {
                (engine.active() == Symbol::X) == (x == o)
            }
            Phase::RoundOver => true,
        };
        balanced && active_matches
    }

    fn description() -> &'static str {
        "Symbols alternate starting with X"
    }
}

/// At most one symbol holds a winning line.
pub struct SingleWinnerInvariant;

impl Invariant<TurnEngine> for SingleWinnerInvariant {
    fn holds(engine: &TurnEngine) -> bool {
        let board = engine.board();
        !(check_winner(Symbol::X, board.occupied(Symbol::X))
            && check_winner(Symbol::O, board.occupied(Symbol::O)))
    }

    fn description() -> &'static str {
        "Only one symbol can complete a line"
    }
}

/// Returns the description of every invariant `engine` violates.
pub fn violations(engine: &TurnEngine) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if !PartitionInvariant::holds(engine) {
        violations.push(PartitionInvariant::description());
    }
    if !TurnCountInvariant::holds(engine) {
        violations.push(TurnCountInvariant::description());
    }
    if !AlternationInvariant::holds(engine) {
        violations.push(AlternationInvariant::description());
    }
    if !SingleWinnerInvariant::holds(engine) {
        violations.push(SingleWinnerInvariant::description());
    }
    violations
}

/// Panics in debug builds if any invariant is violated.
pub(crate) fn assert_invariants(engine: &TurnEngine) {
    if cfg!(debug_assertions) {
        let violations = violations(engine);
        if !violations.is_empty() {
            error!(?violations, "Engine invariants violated");
        }
        debug_assert!(violations.is_empty(), "Invariant violations: {:?}", violations);
    }
}
