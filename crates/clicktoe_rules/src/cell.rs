//! Grid cells and compact cell sets.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A cell on the 3x3 grid, numbered 1-9 in row-major order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Cell {
    /// All 9 cells in numbering order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Returns the cell number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based row of the cell.
    pub fn row(self) -> u8 {
        self as u8 / 3
    }

    /// Zero-based column of the cell.
    pub fn column(self) -> u8 {
        self as u8 % 3
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A set of cells packed into a 9-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellSet(u16);

impl CellSet {
    const MASK: u16 = 0x1FF;

    /// Creates an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a set holding all 9 cells.
    pub const fn full() -> Self {
        Self(Self::MASK)
    }

    /// Checks whether the cell is a member.
    pub fn contains(self, cell: Cell) -> bool {
        self.0 & cell.bit() != 0
    }

    /// Adds a cell. Returns `false` if it was already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let fresh = !self.contains(cell);
        self.0 |= cell.bit();
        fresh
    }

    /// Removes a cell. Returns `false` if it was not present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        let present = self.contains(cell);
        self.0 &= !cell.bit();
        present
    }

    /// Number of cells in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks whether every cell of `other` is also in `self`.
    pub fn is_superset(self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Checks whether the two sets share no cell.
    pub fn is_disjoint(self, other: CellSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Union of both sets.
    pub fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    /// Iterates over members in numbering order.
    pub fn iter(self) -> impl Iterator<Item = Cell> {
        Cell::iter().filter(move |cell| self.contains(*cell))
    }

    /// Collects the members into a vector.
    pub fn to_vec(self) -> Vec<Cell> {
        self.iter().collect()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl<const N: usize> From<[Cell; N]> for CellSet {
    fn from(cells: [Cell; N]) -> Self {
        cells.into_iter().collect()
    }
}
