use solo_battleship::{
    is_valid_placement, place_ship, Battlefield, BoardError, CellStatus, Coordinate, Orientation,
    ShipId,
};

#[test]
fn test_new_battlefield_is_empty_and_indexed() {
    let grid = Battlefield::new(10);
    assert_eq!(grid.size(), 10);
    assert_eq!(grid.rows().count(), 10);
    for (r, row) in grid.rows().enumerate() {
        assert_eq!(row.len(), 10);
        for (c, cell) in row.iter().enumerate() {
            assert_eq!((cell.row, cell.column), (r, c));
            assert_eq!(cell.status, CellStatus::Empty);
            assert_eq!(cell.ship_id, None);
        }
    }
}

#[test]
fn test_placement_predicate_boundaries() {
    let grid = Battlefield::new(10);
    let origin = Coordinate::new(0, 0);
    assert!(is_valid_placement(&grid, 4, origin, Orientation::Horizontal));
    assert!(is_valid_placement(&grid, 4, origin, Orientation::Vertical));
    assert!(!is_valid_placement(
        &grid,
        4,
        Coordinate::new(0, 7),
        Orientation::Horizontal
    ));
    assert!(!is_valid_placement(
        &grid,
        4,
        Coordinate::new(8, 0),
        Orientation::Vertical
    ));
    // flush against the far edge still fits
    assert!(is_valid_placement(
        &grid,
        4,
        Coordinate::new(0, 6),
        Orientation::Horizontal
    ));
    assert!(is_valid_placement(
        &grid,
        4,
        Coordinate::new(6, 9),
        Orientation::Vertical
    ));
    // the fixed axis must be on the board too
    assert!(!is_valid_placement(
        &grid,
        2,
        Coordinate::new(10, 0),
        Orientation::Horizontal
    ));
}

#[test]
fn test_predicate_rejects_occupied_cells() {
    let mut grid = Battlefield::new(10);
    place_ship(
        &mut grid,
        ShipId(0),
        3,
        Coordinate::new(2, 2),
        Orientation::Vertical,
    )
    .unwrap();
    assert!(!is_valid_placement(
        &grid,
        5,
        Coordinate::new(3, 0),
        Orientation::Horizontal
    ));
    assert!(is_valid_placement(
        &grid,
        5,
        Coordinate::new(5, 0),
        Orientation::Horizontal
    ));
}

#[test]
fn test_manual_place_marks_cells() {
    let mut grid = Battlefield::new(10);
    let ship = place_ship(
        &mut grid,
        ShipId(3),
        4,
        Coordinate::new(1, 5),
        Orientation::Horizontal,
    )
    .unwrap();

    assert_eq!(ship.id(), ShipId(3));
    assert_eq!(ship.size(), 4);
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());
    assert_eq!(
        ship.coordinates(),
        &[
            Coordinate::new(1, 5),
            Coordinate::new(1, 6),
            Coordinate::new(1, 7),
            Coordinate::new(1, 8),
        ]
    );
    for &c in ship.coordinates() {
        let cell = grid.cell(c).unwrap();
        assert_eq!(cell.status, CellStatus::Ship);
        assert_eq!(cell.ship_id, Some(ShipId(3)));
    }
    assert_eq!(grid.count(CellStatus::Ship), 4);
}

#[test]
fn test_manual_place_errors() {
    let mut grid = Battlefield::new(10);
    place_ship(
        &mut grid,
        ShipId(0),
        2,
        Coordinate::new(0, 0),
        Orientation::Horizontal,
    )
    .unwrap();

    assert_eq!(
        place_ship(
            &mut grid,
            ShipId(1),
            3,
            Coordinate::new(0, 1),
            Orientation::Vertical
        )
        .unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        place_ship(
            &mut grid,
            ShipId(1),
            3,
            Coordinate::new(0, 8),
            Orientation::Horizontal
        )
        .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        place_ship(
            &mut grid,
            ShipId(1),
            0,
            Coordinate::new(5, 5),
            Orientation::Horizontal
        )
        .unwrap_err(),
        BoardError::EmptyShip
    );
    // failed placements leave the grid untouched
    assert_eq!(grid.count(CellStatus::Ship), 2);
}

#[test]
fn test_ship_id_display() {
    assert_eq!(ShipId(0).to_string(), "ship-0");
    assert_eq!(ShipId(12).to_string(), "ship-12");
}

#[test]
fn test_starts_near_usize_max_are_out_of_bounds() {
    let mut grid = Battlefield::new(10);
    let far = usize::MAX - 1;
    for (start, orient) in [
        (Coordinate::new(0, far), Orientation::Horizontal),
        (Coordinate::new(far, 0), Orientation::Vertical),
        (Coordinate::new(far, far), Orientation::Horizontal),
    ] {
        assert!(!is_valid_placement(&grid, 3, start, orient));
        assert_eq!(
            place_ship(&mut grid, ShipId(0), 3, start, orient).unwrap_err(),
            BoardError::ShipOutOfBounds
        );
    }
    assert_eq!(grid.count(CellStatus::Ship), 0);

    let tail: Vec<Coordinate> = Orientation::Horizontal
        .span(Coordinate::new(0, far), 3)
        .collect();
    assert_eq!(tail[2], Coordinate::new(0, usize::MAX));
}
