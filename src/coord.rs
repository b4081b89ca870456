//! Board coordinates.

use std::fmt;

/// A cell position on a square board: `row` down, `col` across, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Offsets of the eight surrounding cells.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The up-to-eight cells surrounding this one. Negative indices are
    /// skipped here; the upper bound is the board's to check.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row as i64 + dr;
            let col = self.col as i64 + dc;
            (row >= 0 && col >= 0).then(|| Coord::new(row as usize, col as usize))
        })
    }
}

impl fmt::Display for Coord {
    /// One-based, matching the prompt format of the interactive game.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}
