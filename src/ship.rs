//! Ships: a bow, a length and a direction of travel across the grid.

use std::fmt;

use rand::Rng;

use crate::coord::Coord;

/// Orientation of a ship on the board.
///
/// `Horizontal` ships advance along the column axis, `Vertical` ships along
/// the row axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Draw an orientation uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A fleet unit. The occupied cells are always derived from bow, length and
/// orientation; only the undamaged-segment count is mutable state.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Create an undamaged ship anchored at `bow`.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            remaining: length,
        }
    }

    /// The ordered cells this ship occupies, starting at the bow and
    /// advancing one step per segment along the orientation axis.
    /// Recomputed on every call; the ship itself stays authoritative.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.bow.row, self.bow.col + i),
            Orientation::Vertical => Coord::new(self.bow.row + i, self.bow.col),
        })
    }

    /// Returns `true` if `coord` is one of this ship's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|cell| cell == coord)
    }

    /// Record one hit against this ship.
    pub fn register_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// `true` once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged segments left, in `[0, length]`.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.remaining
        )
    }
}
