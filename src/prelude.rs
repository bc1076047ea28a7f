//! Commonly used types and utilities for ease of import.

pub use crate::{AttackResult, Coordinate, GameStatus, Grid, Outcome, Vessel, VesselKind};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_grid, render_history};

#[cfg(feature = "std")]
pub use crate::script::{Command, Event, Script};
