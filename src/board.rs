//! One player's board: the fleet, the shot history and the display grid.
//!
//! Placement and firing keep two separate coordinate sets. `reserved` is
//! filled during placement with every ship cell plus its one-cell clearance
//! ring and is frozen once the fleet is down; collisions are checked against
//! it. `targeted` starts empty when play begins and records every cell the
//! opponent may no longer shoot at. Keeping them apart means the placement
//! footprint never leaks into play as phantom "already shot" cells.

use std::collections::HashSet;

use crate::common::{PlaceError, ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::grid::{CellState, Grid};
use crate::ship::Ship;

/// A square board holding one side's fleet.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    hidden: bool,
    grid: Grid,
    ships: Vec<Ship>,
    reserved: HashSet<Coord>,
    targeted: HashSet<Coord>,
    sunk: usize,
}

impl Board {
    /// An empty `size` × `size` board. A `hidden` board masks intact ship
    /// cells when rendered, which is how an opponent's board is shown.
    pub fn new(size: usize, hidden: bool) -> Self {
        Board {
            size,
            hidden,
            grid: Grid::new(size),
            ships: Vec::new(),
            reserved: HashSet::new(),
            targeted: HashSet::new(),
            sunk: 0,
        }
    }

    /// Whether `coord` falls outside the board.
    pub fn out_of_bounds(&self, coord: Coord) -> bool {
        coord.row >= self.size || coord.col >= self.size
    }

    /// Place `ship`, or report the first offending cell.
    ///
    /// Every cell is validated before anything is written, so a failed
    /// placement leaves the board exactly as it was. Success reserves the
    /// ship's cells and their surrounding ring, keeping later ships at least
    /// one cell away in every direction, diagonals included.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        let cells: Vec<Coord> = ship.cells().collect();
        for &cell in &cells {
            if self.out_of_bounds(cell) {
                return Err(PlaceError::OutOfBounds(cell));
            }
            if self.reserved.contains(&cell) {
                return Err(PlaceError::Collision(cell));
            }
        }
        for &cell in &cells {
            self.grid[cell] = CellState::Ship;
            self.reserved.insert(cell);
            for neighbor in cell.neighbors() {
                if !self.out_of_bounds(neighbor) {
                    self.reserved.insert(neighbor);
                }
            }
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve an incoming shot at `coord`.
    ///
    /// Out-of-bounds and repeated shots are rejected without changing any
    /// state. A valid shot is recorded in `targeted` and marks the grid;
    /// sinking a ship also reveals its clearance ring as known water, and
    /// those ring cells join `targeted` so they cannot be shot at either.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, ShotError> {
        if self.out_of_bounds(coord) {
            return Err(ShotError::OutOfBounds(coord));
        }
        if !self.targeted.insert(coord) {
            return Err(ShotError::AlreadyTargeted(coord));
        }
        match self.ships.iter().position(|ship| ship.contains(coord)) {
            Some(index) => {
                self.grid[coord] = CellState::Hit;
                self.ships[index].register_hit();
                if self.ships[index].is_sunk() {
                    self.sunk += 1;
                    self.reveal_margin(index);
                    Ok(ShotOutcome::Sunk)
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
            None => {
                self.grid[coord] = CellState::Miss;
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Mark the ring around a freshly sunk ship as known water.
    ///
    /// Cells already shot at keep their marks; only untouched cells turn
    /// into [`CellState::Margin`].
    fn reveal_margin(&mut self, index: usize) {
        let cells: Vec<Coord> = self.ships[index].cells().collect();
        for cell in cells {
            for neighbor in cell.neighbors() {
                if !self.out_of_bounds(neighbor) && self.targeted.insert(neighbor) {
                    self.grid[neighbor] = CellState::Margin;
                }
            }
        }
    }

    /// True once every ship on the board has been sunk.
    pub fn fleet_destroyed(&self) -> bool {
        self.sunk == self.ships.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk
    }
}
