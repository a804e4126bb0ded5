use minesweep::{
    Board, BoardError, Coord, GameConfig, GameSession, GameStatus, SweepResult,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn diagonal_board() -> Board {
    let mines: Vec<Coord> = (0..5).map(|i| Coord::new(i, i)).collect();
    Board::with_mines_at(5, 5, &mines).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The score always equals the number of distinct SafeSweep results,
    /// and a mine hit freezes it.
    #[test]
    fn score_counts_safe_sweeps(seed in any::<u64>(), moves in 1..200usize) {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = GameSession::new(&config, &mut rng).unwrap();
        let mut safe_sweeps = 0;
        for _ in 0..moves {
            if session.is_over() {
                break;
            }
            let coord = Coord::new(rng.random_range(0..5), rng.random_range(0..5));
            match session.sweep(coord).unwrap() {
                SweepResult::SafeSweep => {
                    safe_sweeps += 1;
                    prop_assert_eq!(session.score(), safe_sweeps);
                }
                SweepResult::AlreadySwept => {
                    prop_assert_eq!(session.score(), safe_sweeps);
                    prop_assert_eq!(session.status(), GameStatus::InProgress);
                }
                SweepResult::MineHit => {
                    prop_assert_eq!(session.score(), safe_sweeps);
                    prop_assert_eq!(session.status(), GameStatus::Lost);
                }
            }
        }
        prop_assert_eq!(session.score(), safe_sweeps);
    }

    /// A finished session processes no further moves.
    #[test]
    fn terminal_session_rejects_moves(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = GameSession::new(&config, &mut rng).unwrap();
        let mine = session.mines()[0];
        prop_assert_eq!(session.sweep(mine).unwrap(), SweepResult::MineHit);
        prop_assert_eq!(session.status(), GameStatus::Lost);
        let score = session.score();
        let err = session.sweep(Coord::new(0, 0)).unwrap_err();
        prop_assert_eq!(err, BoardError::GameFinished);
        prop_assert_eq!(session.score(), score);
    }
}

#[test]
fn sweeping_every_safe_cell_wins() {
    let mut session = GameSession::with_board(diagonal_board());
    for row in 0..5 {
        for col in 0..5 {
            if row == col {
                continue;
            }
            assert_eq!(
                session.sweep(Coord::new(row, col)).unwrap(),
                SweepResult::SafeSweep
            );
        }
    }
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.score(), 20);
    assert_eq!(
        session.sweep(Coord::new(0, 1)).unwrap_err(),
        BoardError::GameFinished
    );
}

#[test]
fn board_without_safe_cells_starts_won() {
    let mines: Vec<Coord> = (0..2)
        .flat_map(|row| (0..2).map(move |col| Coord::new(row, col)))
        .collect();
    let board = Board::with_mines_at(2, 2, &mines).unwrap();
    let session = GameSession::with_board(board);
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.score(), 0);
}

#[test]
fn out_of_bounds_sweep_leaves_session_untouched() {
    let mut session = GameSession::with_board(diagonal_board());
    let err = session.sweep(Coord::new(5, 0)).unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { row: 5, col: 0 });
    assert_eq!(session.score(), 0);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn fixed_seed_reproduces_the_same_mines() {
    let config = GameConfig::default();
    let mines_a = {
        let mut rng = SmallRng::seed_from_u64(12345);
        GameSession::new(&config, &mut rng).unwrap().mines()
    };
    let mines_b = {
        let mut rng = SmallRng::seed_from_u64(12345);
        GameSession::new(&config, &mut rng).unwrap().mines()
    };
    assert_eq!(mines_a, mines_b);
}
