//! Vessel kinds and the squares a placed vessel owns.

use alloc::vec::Vec;
use core::fmt;

use crate::square::{Coordinate, Square};

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// The three vessel kinds. Behavior is identical across kinds apart from
/// length and whether the critical square can carry armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselKind {
    Minesweeper,
    Destroyer,
    Battleship,
}

impl VesselKind {
    pub const fn length(&self) -> usize {
        match self {
            VesselKind::Minesweeper => 2,
            VesselKind::Destroyer => 3,
            VesselKind::Battleship => 4,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            VesselKind::Minesweeper => "Minesweeper",
            VesselKind::Destroyer => "Destroyer",
            VesselKind::Battleship => "Battleship",
        }
    }

    /// Position of the critical-quarters square within the footprint,
    /// counted from the placement start.
    pub const fn critical_offset(&self) -> usize {
        match self {
            VesselKind::Minesweeper => 0,
            VesselKind::Destroyer => 1,
            VesselKind::Battleship => 2,
        }
    }

    /// Whether the critical square can absorb a strike when armor is on.
    pub const fn is_armorable(&self) -> bool {
        !matches!(self, VesselKind::Minesweeper)
    }

    /// Coordinates covered by this kind starting at `start`, first to last.
    pub fn footprint(
        &self,
        start: Coordinate,
        orientation: Orientation,
    ) -> impl Iterator<Item = Coordinate> {
        (0..self.length() as i32).map(move |i| match orientation {
            Orientation::Horizontal => start.offset(0, i),
            Orientation::Vertical => start.offset(i, 0),
        })
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Effect of a strike that landed on a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strike {
    /// Armor on the critical square took the strike.
    Absorbed,
    Hit,
    Sunk,
}

/// A vessel and the squares it occupies, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Vessel {
    kind: VesselKind,
    squares: Vec<Square>,
    armor_cracked: bool,
}

impl Vessel {
    /// Unplaced vessel of `kind`.
    pub fn new(kind: VesselKind) -> Self {
        Self {
            kind,
            squares: Vec::new(),
            armor_cracked: false,
        }
    }

    pub fn minesweeper() -> Self {
        Self::new(VesselKind::Minesweeper)
    }

    pub fn destroyer() -> Self {
        Self::new(VesselKind::Destroyer)
    }

    pub fn battleship() -> Self {
        Self::new(VesselKind::Battleship)
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    /// Owned squares, first to last along the placement line.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Assign squares directly, bypassing placement checks. Used to seed
    /// scenarios together with [`crate::Grid::set_ships`].
    pub fn set_occupied_squares(&mut self, squares: Vec<Square>) {
        self.squares = squares
            .into_iter()
            .map(|mut sq| {
                sq.set_occupied(true);
                sq
            })
            .collect();
        self.armor_cracked = false;
    }

    /// Whether the vessel owns any squares yet.
    pub fn is_placed(&self) -> bool {
        !self.squares.is_empty()
    }

    pub fn occupies(&self, at: Coordinate) -> bool {
        self.square_at(at).is_some()
    }

    pub fn square_at(&self, at: Coordinate) -> Option<&Square> {
        self.squares.iter().find(|sq| sq.location() == at)
    }

    /// Location of the critical-quarters square, if one is designated.
    pub fn critical_quarters(&self) -> Option<Coordinate> {
        self.squares
            .iter()
            .find(|sq| sq.is_critical_quarters())
            .map(Square::location)
    }

    /// Number of squares struck so far.
    pub fn hits(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_hit()).count()
    }

    /// Sunk once the critical square is hit or every square is hit.
    /// An unplaced vessel is never sunk.
    pub fn is_sunk(&self) -> bool {
        if self.squares.is_empty() {
            return false;
        }
        self.squares
            .iter()
            .any(|sq| sq.is_critical_quarters() && sq.is_hit())
            || self.squares.iter().all(Square::is_hit)
    }

    /// True when the armor on `at` already took a strike and the square
    /// itself is still intact.
    pub(crate) fn armor_absorbed(&self, at: Coordinate) -> bool {
        self.armor_cracked
            && self
                .square_at(at)
                .is_some_and(|sq| sq.is_critical_quarters() && !sq.is_hit())
    }

    /// Claim the squares produced by placement and designate the critical one.
    pub(crate) fn claim(&mut self, squares: Vec<Square>) {
        let critical = self.kind.critical_offset();
        self.squares = squares;
        if let Some(sq) = self.squares.get_mut(critical) {
            sq.set_critical_quarters(true);
        }
        self.armor_cracked = false;
    }

    /// Apply a strike at `at`. Returns `None` when the vessel is not there.
    pub(crate) fn strike(&mut self, at: Coordinate, armored: bool) -> Option<Strike> {
        let kind = self.kind;
        let idx = self.squares.iter().position(|sq| sq.location() == at)?;
        let sq = &mut self.squares[idx];
        if armored && kind.is_armorable() && sq.is_critical_quarters() && !self.armor_cracked {
            self.armor_cracked = true;
            return Some(Strike::Absorbed);
        }
        sq.mark_hit();
        if self.is_sunk() {
            Some(Strike::Sunk)
        } else {
            Some(Strike::Hit)
        }
    }
}

impl From<VesselKind> for Vessel {
    fn from(kind: VesselKind) -> Self {
        Vessel::new(kind)
    }
}
