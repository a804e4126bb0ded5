//! Mine field state: the mine mask, the swept mask, and sweep application.

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, SweepResult};
use crate::coord::Coord;
use core::fmt;
use log::debug;
use rand::Rng;

type Mask = BitGrid<u64>;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Never selected; may or may not be safe.
    Unswept,
    /// Selected earlier and found safe.
    Swept,
    /// Holds a mine. Mines stay mines; selecting one ends the game.
    Mine,
}

/// The mine field: which cells hold mines and which have been swept.
///
/// Mines are fixed once placed. The swept mask only ever gains bits, and a
/// mine cell never gains a swept bit.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    mines: Mask,
    swept: Mask,
}

impl Board {
    /// Create an empty board with no mines.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            mines: Mask::new(rows, cols),
            swept: Mask::new(rows, cols),
        }
    }

    /// Create a board and scatter `mines` distinct mines using `rng`.
    ///
    /// Placement is uniform rejection sampling without replacement: draw a
    /// cell, redraw on collision, until `mines` cells are marked. Requesting
    /// more mines than cells is rejected up front so the loop always
    /// terminates, even at `mines == rows * cols`.
    pub fn with_random_mines<R: Rng>(
        rows: usize,
        cols: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let cells = rows * cols;
        if mines > cells {
            return Err(BoardError::TooManyMines { mines, cells });
        }
        let mut board = Board::new(rows, cols);
        let mut placed = 0;
        while placed < mines {
            let row = rng.random_range(0..rows);
            let col = rng.random_range(0..cols);
            if board.mines.get(row, col)? {
                continue;
            }
            board.mines.set(row, col)?;
            placed += 1;
        }
        debug!("placed {} mines on a {}x{} board", mines, rows, cols);
        Ok(board)
    }

    /// Create a board with mines at fixed coordinates, for scripted games.
    pub fn with_mines_at(rows: usize, cols: usize, mines: &[Coord]) -> Result<Self, BoardError> {
        let mut board = Board::new(rows, cols);
        for coord in mines {
            if !board.contains(*coord) {
                return Err(BoardError::OutOfBounds {
                    row: coord.row,
                    col: coord.col,
                });
            }
            board.mines.set(coord.row, coord.col)?;
        }
        Ok(board)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of mine cells.
    pub fn mine_count(&self) -> usize {
        self.mines.count_ones()
    }

    /// Number of cells swept so far.
    pub fn swept_count(&self) -> usize {
        self.swept.count_ones()
    }

    /// Number of safe cells not yet swept.
    pub fn safe_remaining(&self) -> usize {
        self.rows * self.cols - self.mine_count() - self.swept_count()
    }

    /// True iff the coordinate lies on this board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.rows, self.cols)
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<CellState, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        if self.mines.get(coord.row, coord.col)? {
            Ok(CellState::Mine)
        } else if self.swept.get(coord.row, coord.col)? {
            Ok(CellState::Swept)
        } else {
            Ok(CellState::Unswept)
        }
    }

    /// Apply a sweep at `coord` and report what happened. Mine and swept
    /// cells are left unchanged; a safe cell becomes swept.
    pub fn sweep(&mut self, coord: Coord) -> Result<SweepResult, BoardError> {
        match self.cell(coord)? {
            CellState::Mine => Ok(SweepResult::MineHit),
            CellState::Swept => Ok(SweepResult::AlreadySwept),
            CellState::Unswept => {
                self.swept.set(coord.row, coord.col)?;
                Ok(SweepResult::SafeSweep)
            }
        }
    }

    /// All mine coordinates in row-major order, for end-of-game reporting.
    pub fn mines(&self) -> Vec<Coord> {
        self.mines
            .iter_set_bits()
            .map(|(row, col)| Coord::new(row, col))
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  mines: {:?},\n  swept: {:?}\n}}",
            self.mines, self.swept
        )
    }
}
