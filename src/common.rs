//! Shared outcome and error types for board operations.

use thiserror::Error;

use crate::coord::Coord;

/// Result of a successfully resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// A ship segment was hit but the ship still floats.
    Hit,
    /// The hit took the ship's last segment down.
    Sunk,
    /// Open water.
    Miss,
}

impl ShotOutcome {
    /// A hit of either kind earns the shooter another shot.
    pub fn retains_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Why a ship could not be placed. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("ship cell {0} is off the board")]
    OutOfBounds(Coord),
    #[error("ship cell {0} overlaps a ship or its clearance margin")]
    Collision(Coord),
}

/// Why a shot was rejected. Rejected shots change nothing and may be retried
/// with a different coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotError {
    #[error("shot {0} is off the board")]
    OutOfBounds(Coord),
    #[error("cell {0} was already targeted")]
    AlreadyTargeted(Coord),
}
