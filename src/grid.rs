//! The game board: square matrix, placed vessels and result history.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::common::{AttackResult, GameStatus, Outcome, PlacementError, SonarError};
use crate::config::{BOARD_SIZE, DEFAULT_SONAR_CHARGES};
use crate::ship::{Orientation, Strike, Vessel};
use crate::sonar::SonarProbe;
use crate::square::{Coordinate, Square};

const N: usize = BOARD_SIZE as usize;

type Matrix = [[Square; N]; N];

fn empty_matrix() -> Matrix {
    core::array::from_fn(|r| {
        core::array::from_fn(|c| Square::at(Coordinate::new(r as i32 + 1, c as i32 + 1)))
    })
}

/// A single player's board.
#[derive(Clone)]
pub struct Grid {
    squares: Matrix,
    ships: Vec<Vessel>,
    attacks: Vec<AttackResult>,
    sonar_enabled: bool,
    sonar_charges: u32,
    armored_quarters: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Empty board: no vessels, no history, sonar disabled with the
    /// default number of charges.
    pub fn new() -> Self {
        Grid {
            squares: empty_matrix(),
            ships: Vec::new(),
            attacks: Vec::new(),
            sonar_enabled: false,
            sonar_charges: DEFAULT_SONAR_CHARGES,
            armored_quarters: false,
        }
    }

    /// Place `vessel` starting at (`row`, `column`), extending downward when
    /// `vertical` and rightward otherwise. Returns `false` and leaves the
    /// board untouched if any cell is off the board or already occupied.
    pub fn place_ship(
        &mut self,
        vessel: impl Into<Vessel>,
        row: i32,
        column: char,
        vertical: bool,
    ) -> bool {
        self.try_place_ship(
            vessel,
            Coordinate::from_letter(row, column),
            Orientation::from_vertical(vertical),
        )
        .is_ok()
    }

    /// Fallible form of [`Grid::place_ship`] reporting why a placement failed.
    pub fn try_place_ship(
        &mut self,
        vessel: impl Into<Vessel>,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        let mut vessel = vessel.into();
        let kind = vessel.kind();
        let result = self.check_placement(&vessel, start, orientation);
        if let Err(err) = &result {
            debug!("rejected {} at {} ({:?}): {}", kind, start, orientation, err);
            return result;
        }

        let mut claimed = Vec::with_capacity(kind.length());
        for at in kind.footprint(start, orientation) {
            if let Some((r, c)) = at.index() {
                self.squares[r][c].set_occupied(true);
                claimed.push(self.squares[r][c]);
            }
        }
        vessel.claim(claimed);
        if let Some(at) = vessel.critical_quarters() {
            if let Some((r, c)) = at.index() {
                self.squares[r][c].set_critical_quarters(true);
            }
        }
        debug!("placed {} at {} ({:?})", kind, start, orientation);
        self.ships.push(vessel);
        Ok(())
    }

    /// Scan the whole footprint before anything is claimed.
    fn check_placement(
        &self,
        vessel: &Vessel,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if vessel.is_placed() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let kind = vessel.kind();
        if self.ships.iter().any(|v| v.kind() == kind) {
            return Err(PlacementError::KindAlreadyPlaced(kind.name()));
        }
        for at in kind.footprint(start, orientation) {
            let (r, c) = at.index().ok_or(PlacementError::OutOfBounds(at))?;
            if self.squares[r][c].is_occupied() {
                return Err(PlacementError::Overlaps(at));
            }
        }
        Ok(())
    }

    /// Fire at (`row`, `column`). Every call is appended to the history,
    /// including invalid ones.
    pub fn attack(&mut self, row: i32, column: char) -> AttackResult {
        self.attack_at(Coordinate::from_letter(row, column))
    }

    /// [`Grid::attack`] addressed by coordinate.
    pub fn attack_at(&mut self, target: Coordinate) -> AttackResult {
        let outcome = self.resolve_strike(target);
        debug!("attack {} -> {}", target, outcome);
        let result = AttackResult::new(target, outcome);
        self.attacks.push(result);
        result
    }

    fn resolve_strike(&mut self, target: Coordinate) -> Outcome {
        if !target.is_on_board() || self.is_resolved(target) {
            return Outcome::Invalid;
        }
        let armored = self.armored_quarters;
        let struck = self
            .ships
            .iter_mut()
            .find_map(|vessel| vessel.strike(target, armored));
        match struck {
            None => Outcome::Miss,
            Some(Strike::Absorbed) => {
                trace!("armor absorbed strike at {}", target);
                Outcome::Hit
            }
            Some(strike) => {
                if let Some((r, c)) = target.index() {
                    self.squares[r][c].mark_hit();
                }
                self.classify(strike)
            }
        }
    }

    fn classify(&self, strike: Strike) -> Outcome {
        match strike {
            Strike::Absorbed | Strike::Hit => Outcome::Hit,
            Strike::Sunk if self.ships.iter().all(Vessel::is_sunk) => Outcome::Surrender,
            Strike::Sunk => Outcome::Sunk,
        }
    }

    /// Whether a strike at `at` has already been settled.
    fn is_resolved(&self, at: Coordinate) -> bool {
        if let Some(vessel) = self.vessel_at(at) {
            if vessel.is_sunk() || vessel.square_at(at).is_some_and(Square::is_hit) {
                return true;
            }
            if vessel.armor_absorbed(at) {
                return false;
            }
        }
        self.attacks.iter().any(|res| res.resolves(at))
    }

    /// Pulse sonar centered on (`row`, `column`). Returns `false` without
    /// touching any state when sonar is disabled, out of charges or the
    /// center is off the board.
    pub fn sonar(&mut self, row: i32, column: i32) -> bool {
        self.try_sonar(Coordinate::new(row, column)).is_ok()
    }

    /// Fallible form of [`Grid::sonar`].
    pub fn try_sonar(&mut self, center: Coordinate) -> Result<(), SonarError> {
        if !self.sonar_enabled {
            return Err(SonarError::Disabled);
        }
        if self.sonar_charges == 0 {
            return Err(SonarError::NoCharges);
        }
        if !center.is_on_board() {
            return Err(SonarError::OutOfBounds(center));
        }
        self.sonar_charges -= 1;
        for at in SonarProbe::footprint(center) {
            let outcome = self.read_cell(at);
            trace!("sonar {} -> {}", at, outcome);
            self.attacks.push(AttackResult::sonar(at, outcome));
        }
        debug!(
            "sonar pulse at {}, {} charges left",
            center, self.sonar_charges
        );
        Ok(())
    }

    /// Occupancy reading used by sonar; never mutates.
    fn read_cell(&self, at: Coordinate) -> Outcome {
        match at.index() {
            None => Outcome::Invalid,
            Some((r, c)) if self.squares[r][c].is_occupied() => Outcome::Hit,
            Some(_) => Outcome::Miss,
        }
    }

    /// Vessel occupying `at`, if any.
    pub fn vessel_at(&self, at: Coordinate) -> Option<&Vessel> {
        self.ships.iter().find(|v| v.occupies(at))
    }

    /// Read-only view of the cell at `at`.
    pub fn square(&self, at: Coordinate) -> Option<&Square> {
        at.index().map(|(r, c)| &self.squares[r][c])
    }

    pub fn ships(&self) -> &[Vessel] {
        &self.ships
    }

    /// Replace the vessel list and rebuild cell occupancy from it.
    pub fn set_ships(&mut self, ships: Vec<Vessel>) {
        self.squares = empty_matrix();
        for vessel in &ships {
            for sq in vessel.squares() {
                if let Some((r, c)) = sq.location().index() {
                    self.squares[r][c].set_occupied(true);
                    if sq.is_critical_quarters() {
                        self.squares[r][c].set_critical_quarters(true);
                    }
                    if sq.is_hit() {
                        self.squares[r][c].mark_hit();
                    }
                }
            }
        }
        self.ships = ships;
    }

    /// Ordered history of attack and sonar results.
    pub fn attacks(&self) -> &[AttackResult] {
        &self.attacks
    }

    pub fn set_attacks(&mut self, attacks: Vec<AttackResult>) {
        self.attacks = attacks;
    }

    pub fn sonar_enabled(&self) -> bool {
        self.sonar_enabled
    }

    pub fn set_sonar_enabled(&mut self, enabled: bool) {
        self.sonar_enabled = enabled;
    }

    /// Remaining sonar charges.
    pub fn sonar_count(&self) -> u32 {
        self.sonar_charges
    }

    pub fn set_sonar_count(&mut self, charges: u32) {
        self.sonar_charges = charges;
    }

    pub fn armored_quarters(&self) -> bool {
        self.armored_quarters
    }

    /// When enabled, the critical square of a Destroyer or Battleship takes
    /// two strikes to sink the vessel.
    pub fn set_armored_quarters(&mut self, armored: bool) {
        self.armored_quarters = armored;
    }

    /// Number of vessels not yet sunk.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|v| !v.is_sunk()).count()
    }

    pub fn status(&self) -> GameStatus {
        if self.ships.is_empty() {
            GameStatus::Setup
        } else if self.remaining_ships() == 0 {
            GameStatus::Surrendered
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("ships", &self.ships)
            .field("attacks", &self.attacks.len())
            .field("sonar_enabled", &self.sonar_enabled)
            .field("sonar_charges", &self.sonar_charges)
            .field("armored_quarters", &self.armored_quarters)
            .finish()
    }
}
