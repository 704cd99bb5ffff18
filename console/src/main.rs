use anyhow::Context;
use clap::{Parser, ValueEnum};
use minesweeper_console::{ConsoleView, run};
use minesweeper_core::{GameConfig, GameEngine};
use std::io;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Difficulty {
    /// 10x10 grid with 10 mines
    Beginner,
    /// 16x16 grid with 40 mines
    Intermediate,
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Beginner => GameConfig::beginner(),
            Difficulty::Intermediate => GameConfig::intermediate(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Grid size and mine count
    #[arg(short, long, value_enum, default_value_t = Difficulty::Beginner)]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let config = GameConfig::from(args.difficulty);
    let view = ConsoleView::new(io::stdout());
    let mut engine = match args.seed {
        Some(seed) => GameEngine::with_seed(config, seed, view),
        None => GameEngine::new(config, view),
    };

    let end = run(&mut engine, io::stdin().lock()).context("Console session failed")?;
    log::info!("Session ended: {:?}", end);

    Ok(())
}
