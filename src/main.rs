#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use minesweeper::{init_logging, session, Board, Game, BOARD_HEIGHT, BOARD_WIDTH, MINE_COUNT};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Terminal Minesweeper: reveal every safe cell without hitting a mine.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for a reproducible board (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Number of rows.
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: usize,
    /// Number of columns.
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: usize,
    /// Number of hidden mines; must be less than height * width.
    #[arg(long, default_value_t = MINE_COUNT)]
    mines: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(s) => s,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
    };
    log::info!("using seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let board = Board::build(cli.height, cli.width, cli.mines, &mut rng)?;
    let mut game = Game::new(board);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut game, stdin.lock(), stdout.lock())?;
    Ok(())
}
