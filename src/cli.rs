//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ludo::ludo::Color;
use ludo::{SimulationConfig, StrategyKind};

/// Ludo rules engine with AI seats and batch statistics
#[derive(Parser, Debug)]
#[command(name = "ludo")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a batch of games and write the statistics as JSON
    Simulate {
        #[command(flatten)]
        setup: Setup,

        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Spread games over all cores
        #[arg(long)]
        parallel: bool,

        /// Record layout
        #[arg(long, value_enum, default_value_t = Format::Summary)]
        format: Format,

        /// Where to write the record
        #[arg(short, long, default_value = "batch_game_log.json")]
        output: PathBuf,
    },

    /// Play one game and print every move and the final board as JSON lines
    Play {
        #[command(flatten)]
        setup: Setup,

        /// Also print the text board after the game
        #[arg(long)]
        board: bool,
    },
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct Setup {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the dice
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Stop a game without a winner after this many rolls
    #[arg(long)]
    pub turn_limit: Option<u32>,

    #[arg(long, value_enum)]
    pub red: Option<StrategyKind>,
    #[arg(long, value_enum)]
    pub green: Option<StrategyKind>,
    #[arg(long, value_enum)]
    pub yellow: Option<StrategyKind>,
    #[arg(long, value_enum)]
    pub blue: Option<StrategyKind>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Totals per color
    Summary,
    /// One value per game per color
    Series,
}

impl Setup {
    /// Loads the config file, if any, then applies the flags on top.
    pub fn resolve(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_file(path)?,
            None => SimulationConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.turn_limit.is_some() {
            config.turn_limit = self.turn_limit;
        }
        let overrides = [self.red, self.green, self.yellow, self.blue];
        for (color, strategy) in Color::ALL.into_iter().zip(overrides) {
            if let Some(strategy) = strategy {
                config.seats.set(color, strategy);
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Config for a batch run. Batches only write totals, so per-move
    /// events are never collected.
    pub fn for_batch(&self, games: Option<u32>, parallel: bool) -> anyhow::Result<SimulationConfig> {
        let mut config = self.resolve()?;
        if let Some(games) = games {
            config.games = games;
        }
        config.parallel |= parallel;
        config.verbose = false;
        Ok(config)
    }
}
