//! A runtime-sized square grid of display cell states.
//!
//! The grid records what a renderer should draw for each cell; it knows
//! nothing about ships or turn order. Indexing with a raw [`Coord`] panics
//! if either axis is out of bounds, so callers validate first (the board
//! never hands it an unchecked coordinate); `get` and `get_mut` are the
//! checked variants.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::coord::Coord;

/// What a single cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Untouched water.
    Empty,
    /// An intact ship segment.
    Ship,
    /// A ship segment that has been hit.
    Hit,
    /// A shot that found open water.
    Miss,
    /// Known-empty water ringing a destroyed ship.
    Margin,
}

/// An N×N grid of [`CellState`] with N fixed at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-[`CellState::Empty`] grid of `size` × `size` cells.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Position of `coord` in the backing vector, `None` if either axis
    /// is off the grid. Every lookup funnels through here; a column past
    /// the edge must never alias into the next row.
    fn offset(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size)
            .then(|| coord.row * self.size + coord.col)
    }

    /// Bounds-checked read; `None` if `coord` is off the grid.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.offset(coord).map(|index| self.cells[index])
    }

    /// Bounds-checked mutable access; `None` if `coord` is off the grid.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut CellState> {
        self.offset(coord).and_then(move |index| self.cells.get_mut(index))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Iterate the grid row by row, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }
}

impl Index<Coord> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coord) -> &CellState {
        let index = self.offset(coord).expect("coordinate out of bounds");
        &self.cells[index]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut CellState {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        for row in self.rows() {
            for cell in row {
                let glyph = match cell {
                    CellState::Empty => '.',
                    CellState::Ship => '■',
                    CellState::Hit => 'X',
                    CellState::Miss => 'T',
                    CellState::Margin => '-',
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
