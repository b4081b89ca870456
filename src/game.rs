//! Turn sequencing between two boards.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::coord::Coord;
use crate::player::Player;

/// The two sides of a match. Side A moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for this side to move.
    Turn(Side),
    Over {
        winner: Side,
    },
}

/// One resolved move, for renderers and score keeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub side: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// Core game logic holding both boards, both players and the turn order.
///
/// Each side fires at the opposing board. The engine never inspects ship
/// positions itself; all hit and bookkeeping logic lives in [`Board`].
pub struct Game {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    status: GameStatus,
}

impl Game {
    /// Start a match between two placed boards. Side A moves first and
    /// fires at `board_b`; side B fires at `board_a`.
    pub fn new(
        board_a: Board,
        board_b: Board,
        player_a: Box<dyn Player>,
        player_b: Box<dyn Player>,
    ) -> Self {
        Game {
            boards: [board_a, board_b],
            players: [player_a, player_b],
            status: GameStatus::Turn(Side::A),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Play one move to completion and report it; `None` once the match
    /// is over.
    ///
    /// The mover proposes targets until the defending board accepts one;
    /// rejected proposals never reach the report. A hit or a sink keeps the
    /// turn with the mover, a miss hands it over, and destroying the last
    /// ship ends the match on the spot regardless.
    pub fn advance(&mut self, rng: &mut SmallRng) -> Option<MoveReport> {
        let side = match self.status {
            GameStatus::Turn(side) => side,
            GameStatus::Over { .. } => return None,
        };
        let defender = side.opponent();
        let board_size = self.boards[defender.index()].size();

        let mut rejection = None;
        let (target, outcome) = loop {
            let target =
                self.players[side.index()].select_target(rng, board_size, rejection.as_ref());
            match self.boards[defender.index()].fire(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => {
                    debug!("side {:?} shot rejected: {}", side, err);
                    rejection = Some(err);
                }
            }
        };

        if self.boards[defender.index()].fleet_destroyed() {
            debug!("game over, side {:?} wins", side);
            self.status = GameStatus::Over { winner: side };
        } else if !outcome.retains_turn() {
            self.status = GameStatus::Turn(defender);
        }
        Some(MoveReport {
            side,
            target,
            outcome,
        })
    }
}
