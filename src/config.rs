//! Game setup parameters: board size, fleet makeup, placement budget.

use thiserror::Error;

/// Board side length used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// The classic small fleet: one three-decker, two two-deckers, four boats.
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// How many random bow draws one board attempt may spend in total before
/// it is abandoned and placement restarts on a fresh board.
pub const DEFAULT_PLACEMENT_BUDGET: u32 = 2000;

/// A rejected setup parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroBoardSize,
    #[error("fleet must contain at least one ship")]
    EmptyFleet,
    #[error("ship lengths must be at least 1")]
    ZeroShipLength,
}

/// Validated parameters for one game.
///
/// Validation is structural only; a fleet that is too crowded to ever fit
/// its board is accepted here and will simply never finish generating.
#[derive(Debug, Clone)]
pub struct GameConfig {
    board_size: usize,
    fleet: Vec<usize>,
    placement_budget: u32,
}

impl GameConfig {
    /// Build a config from a board size and ship lengths, longest first by
    /// convention though any order is accepted.
    pub fn new(board_size: usize, fleet: Vec<usize>) -> Result<Self, ConfigError> {
        if board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if fleet.iter().any(|&length| length == 0) {
            return Err(ConfigError::ZeroShipLength);
        }
        Ok(GameConfig {
            board_size,
            fleet,
            placement_budget: DEFAULT_PLACEMENT_BUDGET,
        })
    }

    /// Replace the per-attempt draw budget.
    pub fn with_placement_budget(mut self, budget: u32) -> Self {
        self.placement_budget = budget;
        self
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Ship lengths to place, in placement order.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    pub fn placement_budget(&self) -> u32 {
        self.placement_budget
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            placement_budget: DEFAULT_PLACEMENT_BUDGET,
        }
    }
}
