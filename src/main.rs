use clap::Parser;
use minesweep::{init_logging, run_game, GameConfig, GameSession, BOARD_COLS, BOARD_ROWS, MINE_COUNT};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = BOARD_ROWS, help = "Number of rows (max 26)")]
    rows: usize,
    #[arg(long, default_value_t = BOARD_COLS, help = "Number of columns (max 9)")]
    cols: usize,
    #[arg(long, default_value_t = MINE_COUNT, help = "Number of mines")]
    mines: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config =
        GameConfig::new(cli.rows, cli.cols, cli.mines).map_err(|e| anyhow::anyhow!(e))?;
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut session = GameSession::new(&config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let stdin = io::stdin();
    run_game(&mut session, &mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}
