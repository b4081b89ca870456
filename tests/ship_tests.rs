use broadside::{Coord, Orientation, Ship};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_cells_horizontal() {
    let ship = Ship::new(Coord::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
    );
}

#[test]
fn test_cells_vertical() {
    let ship = Ship::new(Coord::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0)
        ]
    );
}

#[test]
fn test_contains() {
    let ship = Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    for cell in ship.cells() {
        assert!(ship.contains(cell));
    }
    assert!(!ship.contains(Coord::new(1, 3)));
    assert!(!ship.contains(Coord::new(0, 1)));
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    assert!(!ship.is_sunk());
    assert_eq!(ship.remaining(), 2);
    ship.register_hit();
    assert!(!ship.is_sunk());
    ship.register_hit();
    assert!(ship.is_sunk());
    assert_eq!(ship.remaining(), 0);
}

#[test]
fn test_random_orientation_draws_both() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut seen_horizontal = false;
    let mut seen_vertical = false;
    for _ in 0..64 {
        match Orientation::random(&mut rng) {
            Orientation::Horizontal => seen_horizontal = true,
            Orientation::Vertical => seen_vertical = true,
        }
    }
    assert!(seen_horizontal && seen_vertical);
}
