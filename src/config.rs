//! Default board dimensions and the validated game configuration.

use core::fmt;

/// Default number of rows.
pub const BOARD_ROWS: usize = 5;
/// Default number of columns.
pub const BOARD_COLS: usize = 5;
/// Default number of mines.
pub const MINE_COUNT: usize = 5;

/// Row letters `A`..=`Z` cap the coordinate scheme at 26 rows.
pub const MAX_ROWS: usize = 26;
/// Column digits `1`..=`9` cap the coordinate scheme at 9 columns.
pub const MAX_COLS: usize = 9;

/// Errors from validating a game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board must have at least one row and one column.
    EmptyBoard,
    /// More rows than the letter coordinate scheme can address.
    TooManyRows(usize),
    /// More columns than the digit coordinate scheme can address.
    TooManyCols(usize),
    /// More mines than cells.
    TooManyMines { mines: usize, cells: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => {
                write!(f, "board must have at least one row and one column")
            }
            ConfigError::TooManyRows(rows) => write!(
                f,
                "{} rows requested but letter coordinates address at most {}",
                rows, MAX_ROWS
            ),
            ConfigError::TooManyCols(cols) => write!(
                f,
                "{} columns requested but digit coordinates address at most {}",
                cols, MAX_COLS
            ),
            ConfigError::TooManyMines { mines, cells } => write!(
                f,
                "{} mines requested but the board has only {} cells",
                mines, cells
            ),
        }
    }
}

/// A validated board size and mine count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl GameConfig {
    /// Build a configuration, rejecting sizes the two-character coordinate
    /// scheme cannot address and mine counts exceeding the cell count.
    pub fn new(rows: usize, cols: usize, mines: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows(rows));
        }
        if cols > MAX_COLS {
            return Err(ConfigError::TooManyCols(cols));
        }
        let cells = rows * cols;
        if mines > cells {
            return Err(ConfigError::TooManyMines { mines, cells });
        }
        Ok(GameConfig { rows, cols, mines })
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of cells that hold no mine.
    pub fn safe_cells(&self) -> usize {
        self.cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            mines: MINE_COUNT,
        }
    }
}
