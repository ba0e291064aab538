//! Game rules for tic-tac-toe.
//!
//! Pure functions over cell sets and boards, kept apart from board storage
//! so the turn engine and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WINNING_PATTERNS, check_winner, winning_pattern};
