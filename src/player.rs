use rand::rngs::SmallRng;

use crate::common::ShotError;
use crate::coord::Coord;

/// Interface implemented by different player types.
///
/// The engine asks for targets until the defending board accepts one. When
/// a proposal is rejected the reason comes back on the next call, so an
/// interactive player can explain it before re-prompting; automated players
/// can ignore it and draw again.
pub trait Player {
    /// Choose the next target on an opponent board of `board_size` cells a side.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
        rejected: Option<&ShotError>,
    ) -> Coord;
}
