use broadside::{CellState, Coord, Grid};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(4);
    assert_eq!(grid.size(), 4);
    assert_eq!(grid.count(CellState::Empty), 16);
}

#[test]
fn test_index_and_get() {
    let mut grid = Grid::new(4);
    grid[Coord::new(1, 2)] = CellState::Hit;
    assert_eq!(grid[Coord::new(1, 2)], CellState::Hit);
    assert_eq!(grid.get(Coord::new(1, 2)), Some(CellState::Hit));
    assert_eq!(grid.get(Coord::new(4, 0)), None);
    assert_eq!(grid.get(Coord::new(0, 4)), None);
}

#[test]
fn test_get_mut_writes_in_place() {
    let mut grid = Grid::new(4);
    *grid.get_mut(Coord::new(2, 3)).unwrap() = CellState::Margin;
    assert_eq!(grid.get(Coord::new(2, 3)), Some(CellState::Margin));
    assert!(grid.get_mut(Coord::new(2, 4)).is_none());
}

#[test]
#[should_panic(expected = "coordinate out of bounds")]
fn test_index_panics_past_column_edge() {
    // the flattened offset of (0, 7) lands inside the vector; it must
    // still panic instead of reading (1, 1)
    let grid = Grid::new(6);
    let _ = grid[Coord::new(0, 7)];
}

#[test]
#[should_panic(expected = "coordinate out of bounds")]
fn test_index_mut_panics_past_column_edge() {
    let mut grid = Grid::new(6);
    grid[Coord::new(0, 8)] = CellState::Miss;
}

#[test]
fn test_rows_iterate_in_order() {
    let mut grid = Grid::new(3);
    grid[Coord::new(0, 2)] = CellState::Miss;
    grid[Coord::new(2, 0)] = CellState::Ship;
    let rows: Vec<&[CellState]> = grid.rows().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][2], CellState::Miss);
    assert_eq!(rows[2][0], CellState::Ship);
}

#[test]
fn test_neighbors_clip_at_origin() {
    let neighbors: Vec<Coord> = Coord::new(0, 0).neighbors().collect();
    assert_eq!(neighbors.len(), 3);
    assert!(neighbors.contains(&Coord::new(0, 1)));
    assert!(neighbors.contains(&Coord::new(1, 0)));
    assert!(neighbors.contains(&Coord::new(1, 1)));
}

#[test]
fn test_neighbors_interior_count() {
    let neighbors: Vec<Coord> = Coord::new(3, 3).neighbors().collect();
    assert_eq!(neighbors.len(), 8);
    // a cell is not its own neighbor
    assert!(!neighbors.contains(&Coord::new(3, 3)));
}

#[test]
fn test_coord_displays_one_based() {
    assert_eq!(Coord::new(0, 0).to_string(), "(1, 1)");
    assert_eq!(Coord::new(2, 4).to_string(), "(3, 5)");
}
