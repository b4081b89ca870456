use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::ShotError;
use crate::coord::Coord;
use crate::player::Player;

/// Simple AI player that fires at uniformly random cells.
///
/// Repeated cells are rejected by the defending board, so the AI never
/// inspects shot history; it just draws until a proposal sticks.
pub struct AiPlayer {
    delay: Duration,
}

impl AiPlayer {
    pub fn new() -> Self {
        AiPlayer {
            delay: Duration::ZERO,
        }
    }

    /// Pause this long before each fresh pick, giving a human opponent
    /// time to read the board. Redraws after a rejection stay instant.
    pub fn with_delay(delay: Duration) -> Self {
        AiPlayer { delay }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
        rejected: Option<&ShotError>,
    ) -> Coord {
        if rejected.is_none() && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Coord::new(
            rng.random_range(0..board_size),
            rng.random_range(0..board_size),
        )
    }
}
