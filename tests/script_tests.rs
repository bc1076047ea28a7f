#![cfg(feature = "std")]

use battlegrid::script::{parse_coord, Command, Event, Script};
use battlegrid::{render_grid, render_history, Coordinate, Grid, Orientation, Outcome, VesselKind};

#[test]
fn parses_coordinates() {
    assert_eq!(parse_coord("C4"), Ok(Coordinate::from_letter(4, 'C')));
    assert_eq!(parse_coord("j10"), Ok(Coordinate::new(10, 10)));
    // off-board still parses; the grid decides
    assert_eq!(parse_coord("K11"), Ok(Coordinate::new(11, 11)));
    assert!(parse_coord("").is_err());
    assert!(parse_coord("4C").is_err());
    assert!(parse_coord("C").is_err());
}

#[test]
fn parses_commands() {
    assert_eq!(
        Command::parse("place battleship A3 v"),
        Ok(Some(Command::Place {
            kind: VesselKind::Battleship,
            at: Coordinate::from_letter(3, 'A'),
            orientation: Orientation::Vertical,
        }))
    );
    assert_eq!(Command::parse("  # comment"), Ok(None));
    assert_eq!(Command::parse(""), Ok(None));
    assert_eq!(Command::parse("enable-sonar off"), Ok(Some(Command::EnableSonar(false))));
    assert_eq!(Command::parse("charges 5"), Ok(Some(Command::Charges(5))));
    assert!(Command::parse("place carrier A1 h").is_err());
    assert!(Command::parse("attack A1 B2").is_err());
    assert!(Command::parse("launch A1").is_err());
}

#[test]
fn script_error_reports_line() {
    let err = Script::parse("show\n\nattack\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.to_string().starts_with("line 3:"));
}

#[test]
fn script_plays_to_surrender_and_stops() {
    let text = "\
place minesweeper A1 h
enable-sonar
sonar B2
attack B1
attack A1
attack C1
";
    let script = Script::parse(text).unwrap();
    assert_eq!(script.commands().len(), 6);

    let mut grid = Grid::new();
    let events = script.run(&mut grid);
    assert_eq!(events.len(), 5);
    match &events[2] {
        Event::Sonar { result, readings, .. } => {
            assert!(result.is_ok());
            assert_eq!(readings.len(), 13);
        }
        other => panic!("expected sonar event, got {:?}", other),
    }
    match &events[4] {
        Event::Attacked(res) => assert_eq!(res.outcome(), Outcome::Surrender),
        other => panic!("expected attack event, got {:?}", other),
    }
    assert_eq!(grid.attacks().len(), 15);
}

#[test]
fn refused_commands_surface_as_events() {
    let script = Script::parse("place destroyer I1 h\nsonar A1\n").unwrap();
    let mut grid = Grid::new();
    let events = script.run(&mut grid);
    assert!(matches!(&events[0], Event::Placed { result: Err(_), .. }));
    assert!(events[1].to_string().contains("refused"));
    assert!(grid.attacks().is_empty());
}

#[test]
fn renders_board_and_history() {
    let mut grid = Grid::new();
    assert!(grid.place_ship(VesselKind::Destroyer, 2, 'B', false));
    grid.attack(2, 'B');
    grid.attack(5, 'E');

    let hidden = render_grid(&grid, false);
    let lines: Vec<_> = hidden.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].contains("A B C D E F G H I J"));
    assert_eq!(lines[2], " 2  . X . . . . . . . .");
    assert_eq!(lines[5], " 5  . . . . o . . . . .");

    let shown = render_grid(&grid, true);
    assert_eq!(shown.lines().nth(2), Some(" 2  . X S S . . . . . ."));

    let history = render_history(grid.attacks());
    assert_eq!(history.lines().count(), 2);
    assert!(history.lines().next().unwrap().contains("HIT"));
}
