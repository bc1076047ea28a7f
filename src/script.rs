#![cfg(feature = "std")]

//! Line-oriented scenario scripts driven against a [`Grid`].
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! place minesweeper A1 h
//! enable-sonar
//! sonar C4
//! attack A1
//! show
//! ```

use std::fmt;
use std::string::String;
use std::vec::Vec;

use crate::{
    common::{AttackResult, Outcome, PlacementError, SonarError},
    config::kind_by_name,
    grid::Grid,
    ship::{Orientation, VesselKind},
    square::Coordinate,
    ui::render_grid,
};

/// A single parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place {
        kind: VesselKind,
        at: Coordinate,
        orientation: Orientation,
    },
    Attack(Coordinate),
    Sonar(Coordinate),
    EnableSonar(bool),
    Charges(u32),
    Armor(bool),
    /// Render the board with vessels revealed.
    Show,
}

/// What running one command did to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Placed {
        kind: VesselKind,
        at: Coordinate,
        result: Result<(), PlacementError>,
    },
    Attacked(AttackResult),
    Sonar {
        center: Coordinate,
        result: Result<(), SonarError>,
        /// Results appended by the pulse, empty when it was refused.
        readings: Vec<AttackResult>,
    },
    Configured(String),
    Board(String),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Placed { kind, at, result } => match result {
                Ok(()) => write!(f, "placed {} at {}", kind, at),
                Err(e) => write!(f, "could not place {} at {}: {}", kind, at, e),
            },
            Event::Attacked(res) => write!(f, "attack {} -> {}", res.location(), res.outcome()),
            Event::Sonar {
                center,
                result,
                readings,
            } => match result {
                Ok(()) => {
                    write!(f, "sonar {}:", center)?;
                    for res in readings {
                        write!(f, " {}={}", res.location(), res.outcome())?;
                    }
                    Ok(())
                }
                Err(e) => write!(f, "sonar {} refused: {}", center, e),
            },
            Event::Configured(msg) => f.write_str(msg),
            Event::Board(board) => f.write_str(board.trim_end()),
        }
    }
}

/// Script parse failure, tagged with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Parse a coordinate written as column letter then row, e.g. `C4`.
///
/// Only the shape is checked; off-board coordinates parse so the engine
/// can classify them.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("Empty coordinate")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let row_str = chars.as_str();
    let row: i32 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    Ok(Coordinate::from_letter(row, col_ch))
}

fn parse_switch(word: Option<&str>) -> Result<bool, String> {
    match word {
        None | Some("on") => Ok(true),
        Some("off") => Ok(false),
        Some(other) => Err(format!("Expected 'on' or 'off', got '{}'", other)),
    }
}

impl Command {
    /// Parse one line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = |w: Option<&str>, what: &str| -> Result<String, String> {
            w.map(str::to_owned)
                .ok_or_else(|| format!("'{}' needs {}", verb, what))
        };
        let cmd = match verb.as_str() {
            "place" => {
                let name = arg(words.next(), "a vessel kind")?;
                let kind =
                    kind_by_name(&name).ok_or_else(|| format!("Unknown vessel kind '{}'", name))?;
                let at = parse_coord(&arg(words.next(), "a coordinate")?)?;
                let orientation = match arg(words.next(), "an orientation")?.as_str() {
                    "h" | "H" => Orientation::Horizontal,
                    "v" | "V" => Orientation::Vertical,
                    other => return Err(format!("Unknown orientation '{}'", other)),
                };
                Command::Place {
                    kind,
                    at,
                    orientation,
                }
            }
            "attack" => Command::Attack(parse_coord(&arg(words.next(), "a coordinate")?)?),
            "sonar" => Command::Sonar(parse_coord(&arg(words.next(), "a coordinate")?)?),
            "enable-sonar" => Command::EnableSonar(parse_switch(words.next())?),
            "charges" => {
                let n = arg(words.next(), "a count")?;
                Command::Charges(
                    n.parse()
                        .map_err(|_| format!("Invalid charge count '{}'", n))?,
                )
            }
            "armor" => Command::Armor(parse_switch(words.next())?),
            "show" => Command::Show,
            other => return Err(format!("Unknown command '{}'", other)),
        };
        if let Some(extra) = words.next() {
            return Err(format!("Unexpected trailing input '{}'", extra));
        }
        Ok(Some(cmd))
    }

    /// Apply the command to `grid`.
    pub fn run(&self, grid: &mut Grid) -> Event {
        match *self {
            Command::Place {
                kind,
                at,
                orientation,
            } => Event::Placed {
                kind,
                at,
                result: grid.try_place_ship(kind, at, orientation),
            },
            Command::Attack(at) => Event::Attacked(grid.attack_at(at)),
            Command::Sonar(center) => {
                let before = grid.attacks().len();
                let result = grid.try_sonar(center);
                Event::Sonar {
                    center,
                    result,
                    readings: grid.attacks()[before..].to_vec(),
                }
            }
            Command::EnableSonar(on) => {
                grid.set_sonar_enabled(on);
                Event::Configured(format!("sonar {}", if on { "enabled" } else { "disabled" }))
            }
            Command::Charges(n) => {
                grid.set_sonar_count(n);
                Event::Configured(format!("sonar charges set to {}", n))
            }
            Command::Armor(on) => {
                grid.set_armored_quarters(on);
                Event::Configured(format!("armored quarters {}", if on { "on" } else { "off" }))
            }
            Command::Show => Event::Board(render_grid(grid, true)),
        }
    }
}

/// A parsed sequence of commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();
        for (i, line) in text.lines().enumerate() {
            match Command::parse(line) {
                Ok(Some(cmd)) => commands.push(cmd),
                Ok(None) => {}
                Err(message) => return Err(ScriptError { line: i + 1, message }),
            }
        }
        Ok(Script { commands })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Run every command in order, stopping early once the grid surrenders.
    pub fn run(&self, grid: &mut Grid) -> Vec<Event> {
        let mut events = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            let event = cmd.run(grid);
            let surrendered = matches!(
                &event,
                Event::Attacked(res) if res.outcome() == Outcome::Surrender
            );
            events.push(event);
            if surrendered {
                log::info!("all vessels sunk; stopping script");
                break;
            }
        }
        events
    }
}
