//! A single-session console Minesweeper variant.
//!
//! The player sweeps letter-digit coordinates on a small grid; each safe
//! sweep scores a point and the first mine ends the game. [`Board`] holds
//! the grid state, [`GameSession`] threads score and status through the
//! moves, and [`run_game`] drives one game over a text I/O boundary.

mod bitgrid;
mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod player_cli;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::{Board, CellState};
pub use common::{BoardError, SweepResult};
pub use config::{
    ConfigError, GameConfig, BOARD_COLS, BOARD_ROWS, MAX_COLS, MAX_ROWS, MINE_COUNT,
};
pub use coord::{Coord, CoordError};
pub use game::{GameSession, GameStatus};
pub use logging::init_logging;
pub use player_cli::run_game;
