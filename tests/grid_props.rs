use battlegrid::{Coordinate, Grid, Orientation, Outcome, VesselKind, BOARD_SIZE, VESSEL_KINDS};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn kind() -> impl Strategy<Value = VesselKind> {
    prop::sample::select(VESSEL_KINDS.to_vec())
}

fn occupied_cells(grid: &Grid) -> usize {
    let mut n = 0;
    for r in 1..=BOARD_SIZE {
        for c in 1..=BOARD_SIZE {
            if grid.square(Coordinate::new(r, c)).is_some_and(|sq| sq.is_occupied()) {
                n += 1;
            }
        }
    }
    n
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_is_atomic(
        placements in prop::collection::vec((kind(), -1..12i32, -1..12i32, orientation()), 1..6)
    ) {
        let mut grid = Grid::new();
        for (kind, row, col, orient) in placements {
            let before = occupied_cells(&grid);
            let ships_before = grid.ships().len();
            let placed = grid
                .try_place_ship(kind, Coordinate::new(row, col), orient)
                .is_ok();
            let in_bounds = kind
                .footprint(Coordinate::new(row, col), orient)
                .all(|c| c.is_on_board());
            if !in_bounds {
                prop_assert!(!placed);
            }
            if placed {
                prop_assert_eq!(occupied_cells(&grid), before + kind.length());
                prop_assert_eq!(grid.ships().len(), ships_before + 1);
            } else {
                prop_assert_eq!(occupied_cells(&grid), before);
                prop_assert_eq!(grid.ships().len(), ships_before);
            }
        }
    }

    #[test]
    fn repeat_attack_is_invalid(
        row in 1..=BOARD_SIZE,
        col in 1..=BOARD_SIZE,
        vertical in any::<bool>(),
    ) {
        let mut grid = Grid::new();
        grid.place_ship(VesselKind::Battleship, 3, 'C', vertical);
        grid.place_ship(VesselKind::Minesweeper, 9, 'H', false);
        let target = Coordinate::new(row, col);
        let first = grid.attack_at(target);
        prop_assert_ne!(first.outcome(), Outcome::Invalid);
        prop_assert_eq!(grid.attack_at(target).outcome(), Outcome::Invalid);
        prop_assert_eq!(grid.attacks().len(), 2);
    }

    #[test]
    fn surrender_fires_exactly_once(
        order in Just((1..=BOARD_SIZE).flat_map(|r| (1..=BOARD_SIZE).map(move |c| (r, c))).collect::<Vec<_>>())
            .prop_shuffle()
    ) {
        let mut grid = Grid::new();
        prop_assert!(grid.place_ship(VesselKind::Minesweeper, 1, 'A', false));
        prop_assert!(grid.place_ship(VesselKind::Destroyer, 4, 'D', true));
        prop_assert!(grid.place_ship(VesselKind::Battleship, 10, 'G', false));

        let mut surrenders = 0;
        let mut sunk = 0;
        for (r, c) in order {
            match grid.attack_at(Coordinate::new(r, c)).outcome() {
                Outcome::Surrender => surrenders += 1,
                Outcome::Sunk => sunk += 1,
                _ => {}
            }
        }
        prop_assert_eq!(surrenders, 1);
        prop_assert_eq!(sunk, 2);
        prop_assert_eq!(grid.remaining_ships(), 0);
    }

    #[test]
    fn sonar_never_mutates_board(row in 1..=BOARD_SIZE, col in 1..=BOARD_SIZE) {
        let mut grid = Grid::new();
        grid.place_ship(VesselKind::Destroyer, 5, 'E', false);
        grid.set_sonar_enabled(true);
        prop_assert!(grid.sonar(row, col));
        prop_assert_eq!(grid.attacks().len(), 13);
        prop_assert_eq!(grid.ships()[0].hits(), 0);
        prop_assert_eq!(occupied_cells(&grid), 3);
    }
}
