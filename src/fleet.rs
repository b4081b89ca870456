//! Random fleet placement.
//!
//! Ships are dropped onto the board by drawing a bow cell and an
//! orientation and asking the board to accept them. Draws that land a ship
//! off the board or inside another ship's clearance ring are rejected and
//! simply cost a draw; the budget is shared across the whole fleet so a
//! crowded early placement cannot stall the attempt forever.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// One placement attempt on a fresh board.
///
/// Returns `None` if the fleet could not be placed within the config's
/// draw budget, leaving the caller to retry from scratch. Bows are drawn
/// uniformly over the whole board; overhangs are rejected by the board
/// rather than avoided up front, so every cell and orientation stays
/// equally likely.
pub fn attempt<R: Rng + ?Sized>(config: &GameConfig, hidden: bool, rng: &mut R) -> Option<Board> {
    let mut board = Board::new(config.board_size(), hidden);
    let mut draws = 0u32;
    for &length in config.fleet() {
        loop {
            if draws >= config.placement_budget() {
                return None;
            }
            draws += 1;
            let bow = Coord::new(
                rng.random_range(0..config.board_size()),
                rng.random_range(0..config.board_size()),
            );
            let ship = Ship::new(bow, length, Orientation::random(rng));
            if board.place_ship(ship).is_ok() {
                break;
            }
        }
    }
    Some(board)
}

/// Generate a fully placed board, restarting exhausted attempts until one
/// fits. Never returns for a fleet that cannot fit its board at all.
pub fn generate<R: Rng + ?Sized>(config: &GameConfig, hidden: bool, rng: &mut R) -> Board {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        if let Some(board) = attempt(config, hidden, rng) {
            debug!("fleet placed after {} board attempt(s)", attempts);
            return board;
        }
    }
}
