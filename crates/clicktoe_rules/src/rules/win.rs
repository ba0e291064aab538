//! Win detection.

use crate::{Cell, CellSet, Symbol};
use tracing::{instrument, trace};

/// The eight lines that win a round.
pub const WINNING_PATTERNS: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns the first winning pattern fully contained in `occupied`.
pub fn winning_pattern(occupied: CellSet) -> Option<[Cell; 3]> {
    WINNING_PATTERNS
        .iter()
        .copied()
        .find(|pattern| occupied.is_superset(CellSet::from(*pattern)))
}

/// Checks whether the cells held by `symbol` contain a winning pattern.
///
/// Only the symbol that just moved needs checking: a move can never
/// complete the opponent's line.
#[instrument]
pub fn check_winner(symbol: Symbol, occupied: CellSet) -> bool {
    let won = winning_pattern(occupied).is_some();
    trace!(won, "Evaluated winning patterns");
    won
}
