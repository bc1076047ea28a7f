use battlegrid::{kind_by_name, Coordinate, Orientation, Square, Vessel, VesselKind, VESSEL_KINDS};

#[test]
fn kind_lengths() {
    let lengths: Vec<_> = VESSEL_KINDS.iter().map(|k| k.length()).collect();
    assert_eq!(lengths, vec![2, 3, 4]);
    assert_eq!(Vessel::battleship().length(), 4);
}

#[test]
fn kind_lookup_ignores_case() {
    assert_eq!(kind_by_name("destroyer"), Some(VesselKind::Destroyer));
    assert_eq!(kind_by_name("MINESWEEPER"), Some(VesselKind::Minesweeper));
    assert_eq!(kind_by_name("Carrier"), None);
}

#[test]
fn footprint_follows_orientation() {
    let start = Coordinate::from_letter(2, 'C');
    let across: Vec<_> = VesselKind::Destroyer
        .footprint(start, Orientation::Horizontal)
        .collect();
    assert_eq!(
        across,
        vec![
            Coordinate::from_letter(2, 'C'),
            Coordinate::from_letter(2, 'D'),
            Coordinate::from_letter(2, 'E'),
        ]
    );
    let down: Vec<_> = VesselKind::Minesweeper
        .footprint(start, Orientation::Vertical)
        .collect();
    assert_eq!(down, vec![Coordinate::new(2, 3), Coordinate::new(3, 3)]);
}

#[test]
fn unplaced_vessel_is_not_sunk() {
    let vessel = Vessel::minesweeper();
    assert!(!vessel.is_placed());
    assert!(!vessel.is_sunk());
    assert_eq!(vessel.critical_quarters(), None);
}

#[test]
fn seeded_squares_are_occupied() {
    let mut vessel = Vessel::destroyer();
    vessel.set_occupied_squares(vec![Square::new(4, 'A'), Square::new(4, 'B'), Square::new(4, 'C')]);
    assert!(vessel.is_placed());
    assert!(vessel.squares().iter().all(Square::is_occupied));
    assert!(vessel.occupies(Coordinate::from_letter(4, 'B')));
    assert!(!vessel.occupies(Coordinate::from_letter(5, 'B')));
    assert_eq!(vessel.hits(), 0);
}

#[test]
fn coordinate_letters() {
    let c = Coordinate::from_letter(7, 'J');
    assert_eq!(c.column(), 10);
    assert_eq!(c.column_letter(), Some('J'));
    assert!(c.is_on_board());
    assert!(!Coordinate::from_letter(7, 'K').is_on_board());
    assert!(!Coordinate::new(0, 1).is_on_board());
    assert_eq!(c.to_string(), "J7");
    assert_eq!(Square::new(7, 'J').column(), 'J');
}
