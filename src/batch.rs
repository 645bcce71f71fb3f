//! Batch simulation and the JSON records it produces.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, instrument};

use crate::config::{ConfigError, Seats, SimulationConfig};
use crate::driver::{Driver, GameReport};
use crate::ludo::{Color, Game, Stats};

/// Plays `config.games` games and returns their reports in game order.
///
/// Fails without playing anything if `config` does not validate.
///
/// Game `i` rolls dice from a generator seeded with `seed + i`, so a seeded
/// batch gives the same reports whether it runs in parallel or not.
#[instrument(skip_all, fields(games = config.games, parallel = config.parallel))]
pub fn run_batch(config: &SimulationConfig) -> Result<Vec<GameReport>, ConfigError> {
    config.validate()?;
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(base_seed, "batch started");

    let reports: Vec<GameReport> = if config.parallel {
        (0..config.games)
            .into_par_iter()
            .map(|index| {
                let mut game = Game::new(config.rules, &config.seats);
                play_one(config, &mut game, base_seed, index)
            })
            .collect()
    } else {
        let mut game = Game::new(config.rules, &config.seats);
        (0..config.games)
            .map(|index| {
                game.reset();
                play_one(config, &mut game, base_seed, index)
            })
            .collect()
    };

    let unfinished = reports.iter().filter(|r| r.winner.is_none()).count();
    info!(played = reports.len(), unfinished, "batch finished");
    Ok(reports)
}

fn play_one(config: &SimulationConfig, game: &mut Game, base_seed: u64, index: u32) -> GameReport {
    let rng = StdRng::seed_from_u64(base_seed.wrapping_add(index as u64));
    let report = Driver::new(rng, config).play(game);
    debug!(game = index + 1, winner = ?report.winner, rolls = report.rolls, "game played");
    report
}

/// Batch totals for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub strategy: String,
    pub stats: Stats,
}

/// Batch totals keyed by color, the layout of `batch_game_log.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games_played: u32,
    pub players: BTreeMap<Color, PlayerSummary>,
}

impl BatchSummary {
    pub fn new(seats: &Seats, reports: &[GameReport]) -> Self {
        let mut players: BTreeMap<Color, PlayerSummary> = Color::ALL
            .into_iter()
            .map(|color| {
                let summary = PlayerSummary {
                    strategy: seats.get(color).name().to_string(),
                    stats: Stats::default(),
                };
                (color, summary)
            })
            .collect();

        for report in reports {
            for (color, summary) in players.iter_mut() {
                let won = report.winner == Some(*color);
                summary.stats.accumulate(&report.stats[color.index()], won);
            }
        }

        BatchSummary {
            games_played: reports.len() as u32,
            players,
        }
    }
}

/// One value per game for one seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerSeries {
    pub strategy: String,
    pub turns_taken: Vec<u32>,
    pub tokens_captured: Vec<u32>,
    /// Own tokens lost.
    pub tokens_beaten: Vec<u32>,
    pub total_squares_moved: Vec<u32>,
    pub games_won: Vec<bool>,
    /// The winner's turns, `false` for the other seats.
    #[serde(serialize_with = "turns_or_false")]
    pub turns_until_win: Vec<Option<u32>>,
}

/// Per-game columns keyed by color, the layout the plotting script reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSeries {
    pub games_played: u32,
    pub players: BTreeMap<Color, PlayerSeries>,
}

impl BatchSeries {
    pub fn new(seats: &Seats, reports: &[GameReport]) -> Self {
        let mut players: BTreeMap<Color, PlayerSeries> = Color::ALL
            .into_iter()
            .map(|color| {
                let series = PlayerSeries {
                    strategy: seats.get(color).name().to_string(),
                    ..PlayerSeries::default()
                };
                (color, series)
            })
            .collect();

        for report in reports {
            for (color, series) in players.iter_mut() {
                let stats = &report.stats[color.index()];
                let won = report.winner == Some(*color);
                series.turns_taken.push(stats.turns_taken);
                series.tokens_captured.push(stats.tokens_captured);
                series.tokens_beaten.push(stats.own_tokens_captured);
                series.total_squares_moved.push(stats.total_squares_moved);
                series.games_won.push(won);
                series.turns_until_win.push(won.then_some(stats.turns_taken));
            }
        }

        BatchSeries {
            games_played: reports.len() as u32,
            players,
        }
    }
}

fn turns_or_false<S: Serializer>(values: &[Option<u32>], serializer: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    #[serde(untagged)]
    enum Entry {
        Turns(u32),
        Lost(bool),
    }
    serializer.collect_seq(values.iter().map(|v| match v {
        Some(turns) => Entry::Turns(*turns),
        None => Entry::Lost(false),
    }))
}

/// Failure writing a batch record.
#[derive(Debug, Clone, Display, Error)]
#[display("Report error: {} at {}:{}", message, file, line)]
pub struct ReportError {
    pub message: String,
    pub line: u32,
    pub file: &'static str,
}

impl ReportError {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ReportError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for ReportError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Writes `record` as pretty-printed JSON to `path`.
#[instrument(skip(record), fields(path = %path.as_ref().display()))]
pub fn write_json(path: impl AsRef<Path>, record: &impl Serialize) -> Result<(), ReportError> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(writer, record)?;
    info!("report written");
    Ok(())
}
