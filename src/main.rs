mod cli;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, Format, Setup};
use ludo::ludo::Game;
use ludo::{BatchSeries, BatchSummary, Driver, run_batch, write_json};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            setup,
            games,
            parallel,
            format,
            output,
        } => simulate(&setup, games, parallel, format, &output),
        Command::Play { setup, board } => play(&setup, board),
    }
}

fn simulate(setup: &Setup, games: Option<u32>, parallel: bool, format: Format, output: &std::path::Path) -> Result<()> {
    let config = setup.for_batch(games, parallel)?;

    let start = std::time::Instant::now();
    let reports = run_batch(&config)?;
    info!(elapsed = ?start.elapsed(), "simulation done");

    match format {
        Format::Summary => write_json(output, &BatchSummary::new(&config.seats, &reports))?,
        Format::Series => write_json(output, &BatchSeries::new(&config.seats, &reports))?,
    }
    Ok(())
}

fn play(setup: &Setup, board: bool) -> Result<()> {
    let mut config = setup.resolve()?;
    config.verbose = true;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    let mut game = Game::new(config.rules, &config.seats);
    info!(seed, "game started");
    let report = Driver::new(StdRng::seed_from_u64(seed), &config).play(&mut game);
    info!(winner = ?report.winner, rolls = report.rolls, "game over");

    for event in &report.events {
        println!("{}", serde_json::to_string(event)?);
    }
    println!("{}", serde_json::to_string(&game.snapshot())?);
    if board {
        print!("{}", game.snapshot());
    }
    Ok(())
}
