//! Grid coordinates and their two-character text form.

use core::fmt;

/// A zero-based (row, column) pair on the board.
///
/// The text form is one row letter followed by one column digit: `A1` is
/// (0, 0) and `D3` is (3, 2). Letters are case-insensitive. The scheme only
/// addresses 26 rows and 9 columns, which bounds the valid board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Errors produced while decoding player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Input was not exactly one letter followed by one digit.
    InvalidFormat,
    /// Decoded coordinate cannot lie on any board (column digit `0`).
    OutOfRange,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidFormat => write!(f, "input is not a letter-digit pair"),
            CoordError::OutOfRange => write!(f, "coordinate has no board position"),
        }
    }
}

impl Coord {
    /// Create a coordinate from zero-based indices.
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Decode player input of the form `<Letter><Digit>`.
    ///
    /// The digit `0` is well-formed but names no one-based column, so it is
    /// reported as out of range rather than as a format error.
    pub fn parse(input: &str) -> Result<Self, CoordError> {
        let mut chars = input.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CoordError::InvalidFormat);
        };
        if !first.is_ascii_alphabetic() || !second.is_ascii_digit() {
            return Err(CoordError::InvalidFormat);
        }
        let row = (first.to_ascii_uppercase() as u8 - b'A') as usize;
        let col = ((second as u8 - b'0') as usize)
            .checked_sub(1)
            .ok_or(CoordError::OutOfRange)?;
        Ok(Coord { row, col })
    }

    /// True iff the coordinate lies on a `rows × cols` board. The first row
    /// and column are valid; only indices past the board edge are rejected.
    pub fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}
