//! Board state: who holds which cell and what is still free.

use crate::{Cell, CellSet, Symbol};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Raised when a move targets a cell that is not free.
///
/// Callers validate moves before applying them, so seeing this means two
/// writers raced on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell {cell} is not free (held by {holder:?})")]
pub struct BoardError {
    /// The contested cell.
    pub cell: Cell,
    /// Symbol currently holding it.
    pub holder: Option<Symbol>,
}

/// Occupied cells per symbol plus the free cells.
///
/// `x`, `o` and `free` always partition the nine cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    x: CellSet,
    o: CellSet,
    free: CellSet,
    turns: u8,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            x: CellSet::new(),
            o: CellSet::new(),
            free: CellSet::full(),
            turns: 0,
        }
    }

    /// Claims a free cell for `symbol` and bumps the turn counter.
    #[instrument(skip(self), fields(turns = self.turns))]
    pub fn apply_move(&mut self, cell: Cell, symbol: Symbol) -> Result<(), BoardError> {
        if !self.free.remove(cell) {
            return Err(BoardError {
                cell,
                holder: self.symbol_at(cell),
            });
        }
        match symbol {
            Symbol::X => self.x.insert(cell),
            Symbol::O => self.o.insert(cell),
        };
        self.turns += 1;
        Ok(())
    }

    /// Cells held by `symbol`.
    pub fn occupied(&self, symbol: Symbol) -> CellSet {
        match symbol {
            Symbol::X => self.x,
            Symbol::O => self.o,
        }
    }

    /// Cells nobody holds yet.
    pub fn free(&self) -> CellSet {
        self.free
    }

    /// Moves applied so far (0-9).
    pub fn turns(&self) -> u8 {
        self.turns
    }

    /// The symbol on `cell`, if any.
    pub fn symbol_at(&self, cell: Cell) -> Option<Symbol> {
        if self.x.contains(cell) {
            Some(Symbol::X)
        } else if self.o.contains(cell) {
            Some(Symbol::O)
        } else {
            None
        }
    }

    /// Checks whether `cell` is free.
    pub fn is_free(&self, cell: Cell) -> bool {
        self.free.contains(cell)
    }

    /// Checks whether every cell is taken.
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Checks that the three sets are disjoint and cover all nine cells.
    pub fn is_partitioned(&self) -> bool {
        self.x.is_disjoint(self.o)
            && self.x.is_disjoint(self.free)
            && self.o.is_disjoint(self.free)
            && self.x.union(self.o).union(self.free) == CellSet::full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
