use broadside::{fleet, Board, CellState, Coord, GameConfig, Orientation, Ship, ShotError};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn default_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    fleet::generate(&GameConfig::default(), false, &mut rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ship_cells_form_a_line(
        row in 0usize..20,
        col in 0usize..20,
        length in 1usize..6,
        horizontal in any::<bool>(),
    ) {
        let orientation = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let ship = Ship::new(Coord::new(row, col), length, orientation);
        let cells: Vec<Coord> = ship.cells().collect();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], Coord::new(row, col));
        for pair in cells.windows(2) {
            match orientation {
                Orientation::Horizontal => {
                    prop_assert_eq!(pair[1].row, pair[0].row);
                    prop_assert_eq!(pair[1].col, pair[0].col + 1);
                }
                Orientation::Vertical => {
                    prop_assert_eq!(pair[1].col, pair[0].col);
                    prop_assert_eq!(pair[1].row, pair[0].row + 1);
                }
            }
        }
    }

    #[test]
    fn placement_is_atomic(seed in any::<u64>()) {
        let board = default_board(seed);
        let ship_count = board.ships().len();
        let grid_before = board.grid().clone();

        // try a 2-ship everywhere; rejected attempts must change nothing
        for row in 0..6 {
            for col in 0..6 {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    let mut copy = board.clone();
                    let candidate = Ship::new(Coord::new(row, col), 2, orientation);
                    match copy.place_ship(candidate) {
                        Ok(()) => prop_assert_eq!(copy.ships().len(), ship_count + 1),
                        Err(_) => {
                            prop_assert_eq!(copy.grid(), &grid_before);
                            prop_assert_eq!(copy.ships().len(), ship_count);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeat_shot_rejected_and_harmless(
        seed in any::<u64>(),
        row in 0usize..6,
        col in 0usize..6,
    ) {
        let mut board = default_board(seed);
        board.fire(Coord::new(row, col)).unwrap();
        let grid_after = board.grid().clone();
        let sunk_after = board.sunk_count();

        let err = board.fire(Coord::new(row, col)).unwrap_err();
        prop_assert_eq!(err, ShotError::AlreadyTargeted(Coord::new(row, col)));
        prop_assert_eq!(board.grid(), &grid_after);
        prop_assert_eq!(board.sunk_count(), sunk_after);
    }

    #[test]
    fn bombarding_every_cell_destroys_the_fleet(seed in any::<u64>()) {
        let mut board = default_board(seed);
        for row in 0..6 {
            for col in 0..6 {
                // ring reveals may have consumed the cell already
                let _ = board.fire(Coord::new(row, col));
            }
        }
        prop_assert!(board.fleet_destroyed());
        prop_assert_eq!(board.sunk_count(), 7);
        prop_assert_eq!(board.grid().count(CellState::Hit), 11);
        prop_assert_eq!(board.grid().count(CellState::Ship), 0);
    }
}
