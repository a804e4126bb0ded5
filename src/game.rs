//! Session state: the board, the running score, and the win/loss status.

use crate::board::Board;
use crate::common::{BoardError, SweepResult};
use crate::config::GameConfig;
use crate::coord::Coord;
use log::{debug, info};
use rand::Rng;

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One playthrough: exclusively owns its board, the score, and the status.
///
/// The score counts successful safe sweeps and freezes once the session
/// leaves `InProgress`. A finished session accepts no further moves.
pub struct GameSession {
    board: Board,
    score: usize,
    status: GameStatus,
}

impl GameSession {
    /// Start a session with randomly placed mines.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let board = Board::with_random_mines(config.rows, config.cols, config.mines, rng)?;
        Ok(Self::with_board(board))
    }

    /// Start a session on a prepared board.
    pub fn with_board(board: Board) -> Self {
        // A board with no safe cells has nothing left to sweep.
        let status = if board.safe_remaining() == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        info!(
            "new session: {}x{} board, {} mines",
            board.rows(),
            board.cols(),
            board.mine_count()
        );
        GameSession {
            board,
            score: 0,
            status,
        }
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Count of safe cells swept so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the session has been won or lost.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Apply one sweep. Errors if the coordinate is off the board or the
    /// session has already ended.
    pub fn sweep(&mut self, coord: Coord) -> Result<SweepResult, BoardError> {
        if self.is_over() {
            return Err(BoardError::GameFinished);
        }
        let result = self.board.sweep(coord)?;
        match result {
            SweepResult::SafeSweep => {
                self.score += 1;
                if self.board.safe_remaining() == 0 {
                    self.status = GameStatus::Won;
                    info!("all safe cells swept, final score {}", self.score);
                }
            }
            SweepResult::MineHit => {
                self.status = GameStatus::Lost;
                info!("mine hit at {}, final score {}", coord, self.score);
            }
            SweepResult::AlreadySwept => {}
        }
        debug!("sweep {} -> {:?}", coord, result);
        Ok(result)
    }

    /// Mine coordinates in row-major order, for end-of-game reporting.
    pub fn mines(&self) -> Vec<Coord> {
        self.board.mines()
    }
}
