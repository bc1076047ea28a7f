#![cfg(feature = "std")]

//! Plain-text views of a grid, built only from its public accessors.

use std::fmt::Write;
use std::string::String;

use crate::{
    common::{AttackResult, Outcome, Source},
    config::BOARD_SIZE,
    grid::Grid,
    square::{column_letter, Coordinate},
};

const WATER: char = '.';
const VESSEL: char = 'S';
const HIT: char = 'X';
const SUNK: char = '#';
const MISS: char = 'o';

fn cell_symbol(grid: &Grid, at: Coordinate, reveal: bool) -> char {
    if grid.vessel_at(at).is_some_and(|v| v.is_sunk()) {
        return SUNK;
    }
    if grid.square(at).is_some_and(|sq| sq.is_hit()) {
        return HIT;
    }
    let missed = grid.attacks().iter().any(|res| {
        res.source() == Source::Strike && res.location() == at && res.outcome() == Outcome::Miss
    });
    if missed {
        return MISS;
    }
    let occupied = grid.square(at).is_some_and(|sq| sq.is_occupied());
    if reveal && occupied {
        VESSEL
    } else {
        WATER
    }
}

/// Render the board with column letters across the top and row numbers
/// down the side. Unhit vessel squares are only shown when `reveal` is set.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 1..=BOARD_SIZE {
        let _ = write!(out, " {}", column_letter(c).unwrap_or('?'));
    }
    out.push('\n');
    for r in 1..=BOARD_SIZE {
        let _ = write!(out, "{:2} ", r);
        for c in 1..=BOARD_SIZE {
            let _ = write!(out, " {}", cell_symbol(grid, Coordinate::new(r, c), reveal));
        }
        out.push('\n');
    }
    out
}

/// One line per history entry, numbered from 1.
pub fn render_history(attacks: &[AttackResult]) -> String {
    let mut out = String::new();
    for (i, res) in attacks.iter().enumerate() {
        let source = match res.source() {
            Source::Strike => "attack",
            Source::Sonar => "sonar",
        };
        let _ = writeln!(out, "{:3}. {:<6} {:<8} {}", i + 1, source, res.location().to_string(), res.outcome());
    }
    out
}
