use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

use minesweeper::interaction::TokenReader;
use minesweeper::logging::init_logging;
use minesweeper::render::TerminalRenderer;
use minesweeper::session::GameSession;

#[derive(Parser)]
#[command(author, version, about = "Minesweeper on a 9x9 field with 10 mines", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let rng = match cli.seed {
        Some(seed) => {
            log::info!("using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy()
    };

    let mut session = GameSession::new(rng);
    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut renderer = TerminalRenderer::new(stdout.lock());
    minesweeper::game_loop(&mut session, &mut input, &mut renderer)?;
    Ok(())
}
