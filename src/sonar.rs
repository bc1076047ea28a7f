//! Sonar pulse geometry.
//!
//! A pulse covers the four cells two steps straight out from the center
//! (up, down, left, right) followed by the full 3×3 block around it, walked
//! column by column and top to bottom within each column.

use crate::square::Coordinate;

/// Number of cells covered by one pulse.
pub const PULSE_CELLS: usize = 13;

/// `(d_row, d_column)` offsets in visitation order.
const OFFSETS: [(i32, i32); PULSE_CELLS] = build_offsets();

const fn build_offsets() -> [(i32, i32); PULSE_CELLS] {
    let mut out = [(0, 0); PULSE_CELLS];
    out[0] = (-2, 0);
    out[1] = (2, 0);
    out[2] = (0, -2);
    out[3] = (0, 2);
    let mut i = 4;
    let mut dc = -1;
    while dc <= 1 {
        let mut dr = -1;
        while dr <= 1 {
            out[i] = (dr, dc);
            i += 1;
            dr += 1;
        }
        dc += 1;
    }
    out
}

/// Stateless footprint calculator used by [`crate::Grid::sonar`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SonarProbe;

impl SonarProbe {
    /// Offsets relative to the pulse center, in visitation order.
    pub fn offsets() -> &'static [(i32, i32); PULSE_CELLS] {
        &OFFSETS
    }

    /// Cells covered by a pulse at `center`, in visitation order. Cells may
    /// lie off the board near the edges.
    pub fn footprint(center: Coordinate) -> [Coordinate; PULSE_CELLS] {
        OFFSETS.map(|(dr, dc)| center.offset(dr, dc))
    }
}
