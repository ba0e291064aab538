//! Draw detection.

use super::win::check_winner;
use crate::{Board, Symbol};
use tracing::instrument;

/// Checks whether the board is full with no winning line for either symbol.
#[instrument(skip(board), fields(turns = board.turns()))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && !check_winner(Symbol::X, board.occupied(Symbol::X))
        && !check_winner(Symbol::O, board.occupied(Symbol::O))
}
