//! Interactive console loop: prompt, sweep, report.
//!
//! Generic over `BufRead`/`Write` so games can be driven from scripted
//! input in tests; `main` passes locked stdin and stdout.

use std::io::{BufRead, Write};

use crate::common::SweepResult;
use crate::coord::{Coord, CoordError};
use crate::game::{GameSession, GameStatus};

/// Print the welcome banner for the session's board size.
fn print_banner<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    let last = Coord::new(session.board().rows() - 1, session.board().cols() - 1);
    writeln!(out, "Welcome to MineSweeper: ")?;
    writeln!(out, "Sweep the coordinates from A1 to {}", last)?;
    writeln!(out, "1 point per clean sweep - Game ends when you hit a mine!")?;
    Ok(())
}

/// List every mine in row-major order.
fn print_mines<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    write!(out, "Mines Located: ")?;
    for mine in session.mines() {
        write!(out, "{} ", mine)?;
    }
    writeln!(out)
}

/// Run the gameplay loop until the session ends or input runs out, then
/// list the mines. Returns the final status; a session abandoned at EOF is
/// still `InProgress`.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<GameStatus> {
    print_banner(out, session)?;
    let mut line = String::new();
    while !session.is_over() {
        writeln!(out, "Enter coordinates (e.g. D3 or C5): ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let coord = match Coord::parse(line.trim()) {
            Ok(coord) => coord,
            Err(CoordError::InvalidFormat) => {
                writeln!(out, "Invalid input. Please try again.")?;
                continue;
            }
            Err(CoordError::OutOfRange) => {
                writeln!(out, "Coordinates out of range. Please try again.")?;
                continue;
            }
        };
        if !session.board().contains(coord) {
            writeln!(out, "Coordinates out of range. Please try again.")?;
            continue;
        }
        let result = session.sweep(coord).map_err(|e| anyhow::anyhow!(e))?;
        match result {
            SweepResult::SafeSweep => writeln!(out, "Miss! Your score: {}", session.score())?,
            SweepResult::AlreadySwept => writeln!(out, "Coordinates already sweeped!")?,
            SweepResult::MineHit => writeln!(
                out,
                "You hit a mine! Game over. Final score: {}",
                session.score()
            )?,
        }
    }
    if session.status() == GameStatus::Won {
        writeln!(
            out,
            "All safe cells swept! You win. Final score: {}",
            session.score()
        )?;
    }
    print_mines(out, session)?;
    Ok(session.status())
}
