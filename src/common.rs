//! Common types for the sweep game: board errors and sweep results.

use crate::bitgrid::BitGridError;

/// Result of applying a sweep to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepResult {
    /// Cell was safe and is now swept; score goes up by one.
    SafeSweep,
    /// Cell had been swept before; nothing changes.
    AlreadySwept,
    /// Cell held a mine; the session ends.
    MineHit,
}

/// Errors returned by board and session operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bit-grid error (invalid index).
    BitGrid(BitGridError),
    /// Coordinate does not lie on the board.
    OutOfBounds { row: usize, col: usize },
    /// More mines requested than the board has cells.
    TooManyMines { mines: usize, cells: usize },
    /// Move applied to a session that already ended.
    GameFinished,
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        BoardError::BitGrid(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitGrid(e) => write!(f, "BitGrid error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate is out of range: row={}, col={}", row, col)
            }
            BoardError::TooManyMines { mines, cells } => write!(
                f,
                "{} mines requested but the board has only {} cells",
                mines, cells
            ),
            BoardError::GameFinished => write!(f, "Game has already ended"),
        }
    }
}
