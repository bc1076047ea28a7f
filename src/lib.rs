#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod script;
mod ship;
pub mod sonar;
mod square;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::{Orientation, Vessel, VesselKind};
pub use sonar::{SonarProbe, PULSE_CELLS};
pub use square::{column_index, column_letter, Coordinate, Square};
#[cfg(feature = "std")]
pub use ui::{render_grid, render_history};
