//! Board coordinates and the squares they identify.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Map a column letter to its 1-indexed column (`'A'` = 1).
///
/// Characters outside `A..=J` map to indices outside the board and are
/// rejected by bounds checks rather than here.
pub fn column_index(column: char) -> i32 {
    column as i32 - 'A' as i32 + 1
}

/// Map a 1-indexed column back to its letter, if it names a board column.
pub fn column_letter(column: i32) -> Option<char> {
    if (1..=BOARD_SIZE).contains(&column) {
        char::from_u32(('A' as i32 + column - 1) as u32)
    } else {
        None
    }
}

/// A 1-indexed `(row, column)` pair. May lie off the board; attempted
/// coordinates are recorded as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: i32,
    column: i32,
}

impl Coordinate {
    /// Coordinate from numeric row and column.
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Coordinate from a numeric row and a column letter.
    pub fn from_letter(row: i32, column: char) -> Self {
        Self::new(row, column_index(column))
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    /// 1-indexed column.
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Column letter, `None` when the column is off the board.
    pub fn column_letter(&self) -> Option<char> {
        column_letter(self.column)
    }

    /// Whether both axes fall within `1..=BOARD_SIZE`.
    pub fn is_on_board(&self) -> bool {
        (1..=BOARD_SIZE).contains(&self.row) && (1..=BOARD_SIZE).contains(&self.column)
    }

    /// Coordinate shifted by `(d_row, d_column)`.
    pub fn offset(&self, d_row: i32, d_column: i32) -> Self {
        Self::new(self.row + d_row, self.column + d_column)
    }

    /// Zero-based `(row, col)` matrix indices for on-board coordinates.
    pub(crate) fn index(&self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some(((self.row - 1) as usize, (self.column - 1) as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column_letter() {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "({}, {})", self.row, self.column),
        }
    }
}

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    location: Coordinate,
    occupied: bool,
    critical_quarters: bool,
    hit: bool,
}

impl Square {
    /// Empty square at `row` and column letter `column`.
    pub fn new(row: i32, column: char) -> Self {
        Self::at(Coordinate::from_letter(row, column))
    }

    /// Empty square at `location`.
    pub const fn at(location: Coordinate) -> Self {
        Self {
            location,
            occupied: false,
            critical_quarters: false,
            hit: false,
        }
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn row(&self) -> i32 {
        self.location.row()
    }

    /// Column letter; `'?'` for squares built off the board.
    pub fn column(&self) -> char {
        self.location.column_letter().unwrap_or('?')
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    pub fn is_critical_quarters(&self) -> bool {
        self.critical_quarters
    }

    pub fn set_critical_quarters(&mut self, critical: bool) {
        self.critical_quarters = critical;
    }

    /// Whether a strike on this square has been resolved.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub(crate) fn mark_hit(&mut self) {
        self.hit = true;
    }
}
