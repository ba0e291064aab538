//! Fixed screen geometry.
//!
//! Cells are 9x4 boxes laid out edge to edge starting at the top-left corner;
//! prompts sit to the right of the board. Only the draw prompt depends on
//! the terminal size.

use clicktoe_rules::Cell;
use ratatui::layout::Rect;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 4;
const RESET_WIDTH: u16 = 28;
const RESET_HEIGHT: u16 = 3;

/// Area of a board cell.
pub fn cell(cell: Cell) -> Rect {
    Rect::new(
        u16::from(cell.column()) * CELL_WIDTH,
        u16::from(cell.row()) * CELL_HEIGHT,
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

/// Close button, right of the top row.
pub fn close() -> Rect {
    Rect::new(30, 0, 4, 3)
}

/// Frame around the first-mover buttons.
pub fn who_first() -> Rect {
    Rect::new(40, 3, 17, 4)
}

/// "BOT" first-mover button.
pub fn choose_bot() -> Rect {
    Rect::new(40, 4, 8, 3)
}

/// "YOU" first-mover button.
pub fn choose_human() -> Rect {
    Rect::new(49, 4, 8, 3)
}

/// Winner banner.
pub fn winner() -> Rect {
    Rect::new(60, 3, 24, 3)
}

/// Status line under the board.
pub fn status() -> Rect {
    Rect::new(0, 3 * CELL_HEIGHT, 3 * CELL_WIDTH, 3)
}

/// Draw prompt, centred on a terminal of the given size.
pub fn reset_prompt(width: u16, height: u16) -> Rect {
    Rect::new(
        (width / 2).saturating_sub(7),
        height / 2,
        RESET_WIDTH,
        RESET_HEIGHT,
    )
}
