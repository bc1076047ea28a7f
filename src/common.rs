//! Common types for the engine: attack outcomes, result records and errors.

use core::fmt;

use crate::square::Coordinate;

/// Classification of one resolved attack or sonar read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Miss,
    Hit,
    Sunk,
    /// The last unsunk vessel went down.
    Surrender,
    /// Off the board or already resolved.
    #[default]
    Invalid,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Miss => "MISS",
            Outcome::Hit => "HIT",
            Outcome::Sunk => "SUNK",
            Outcome::Surrender => "SURRENDER",
            Outcome::Invalid => "INVALID",
        };
        f.write_str(s)
    }
}

/// What produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    #[default]
    Strike,
    Sonar,
}

/// Immutable record of one attack or sonar read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    location: Coordinate,
    outcome: Outcome,
    source: Source,
}

impl AttackResult {
    /// Result of a direct strike.
    pub const fn new(location: Coordinate, outcome: Outcome) -> Self {
        Self {
            location,
            outcome,
            source: Source::Strike,
        }
    }

    /// Result of one cell of a sonar pulse.
    pub const fn sonar(location: Coordinate, outcome: Outcome) -> Self {
        Self {
            location,
            outcome,
            source: Source::Sonar,
        }
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// Whether this entry resolves its location against further strikes.
    pub(crate) fn resolves(&self, at: Coordinate) -> bool {
        self.source == Source::Strike && self.outcome != Outcome::Invalid && self.location == at
    }
}

/// Overall state of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// No vessel has been placed yet.
    Setup,
    InProgress,
    /// Every vessel is sunk.
    Surrendered,
}

/// Reasons a placement is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// A footprint cell falls outside the board.
    OutOfBounds(Coordinate),
    /// A footprint cell is already claimed by another vessel.
    Overlaps(Coordinate),
    /// The vessel already owns squares.
    AlreadyPlaced,
    /// A vessel of the same kind is already on the grid.
    KindAlreadyPlaced(&'static str),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds(at) => write!(f, "Placement leaves the board at {}", at),
            PlacementError::Overlaps(at) => write!(f, "Placement overlaps another vessel at {}", at),
            PlacementError::AlreadyPlaced => write!(f, "Vessel is already placed"),
            PlacementError::KindAlreadyPlaced(name) => {
                write!(f, "A {} is already on the grid", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// Reasons a sonar pulse is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SonarError {
    Disabled,
    NoCharges,
    OutOfBounds(Coordinate),
}

impl fmt::Display for SonarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SonarError::Disabled => write!(f, "Sonar is not enabled"),
            SonarError::NoCharges => write!(f, "No sonar charges remain"),
            SonarError::OutOfBounds(at) => write!(f, "Sonar target {} is off the board", at),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SonarError {}
