//! Construction-time configuration for games and batches.

use std::path::Path;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::engine::StrategyKind;
use crate::ludo::{Color, Rules};

/// Tunable constants of the strategy heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// Squares behind a token from which an opponent counts as a threat.
    pub risk_reach: u8,
    /// Added per opposing on-track token while standing on that opponent's starting square.
    pub spawn_square_risk: u32,
    /// Smart progress nudge is `moved_squares / (board_length * progress_weight_divisor)`.
    pub progress_weight_divisor: u32,
    /// Aggressive score for a target one roll away.
    pub threat_weight: f64,
    /// Aggressive penalty for losing a previously reachable target.
    pub out_of_reach_penalty: f64,
}

impl Default for Heuristics {
    fn default() -> Self {
        Heuristics {
            risk_reach: 6,
            spawn_square_risk: 3,
            progress_weight_divisor: 10,
            threat_weight: 10.0,
            out_of_reach_penalty: 10.0,
        }
    }
}

/// Strategy bound to each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seats {
    pub red: StrategyKind,
    pub green: StrategyKind,
    pub yellow: StrategyKind,
    pub blue: StrategyKind,
}

impl Seats {
    pub fn get(&self, color: Color) -> StrategyKind {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Yellow => self.yellow,
            Color::Blue => self.blue,
        }
    }

    pub fn set(&mut self, color: Color, strategy: StrategyKind) {
        match color {
            Color::Red => self.red = strategy,
            Color::Green => self.green = strategy,
            Color::Yellow => self.yellow = strategy,
            Color::Blue => self.blue = strategy,
        }
    }
}

impl Default for Seats {
    fn default() -> Self {
        Seats {
            red: StrategyKind::Aggressive,
            green: StrategyKind::Defensive,
            yellow: StrategyKind::Smart,
            blue: StrategyKind::Random,
        }
    }
}

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub games: u32,
    /// Seed for the dice. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub parallel: bool,
    /// Keep the per-move event list of every game.
    pub verbose: bool,
    /// Ends a game without a winner after this many rolls.
    pub turn_limit: Option<u32>,
    pub rules: Rules,
    pub heuristics: Heuristics,
    pub seats: Seats,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            games: 100,
            seed: None,
            parallel: false,
            verbose: false,
            turn_limit: None,
            rules: Rules::default(),
            heuristics: Heuristics::default(),
            seats: Seats::default(),
        }
    }
}

impl SimulationConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Rejects settings the rules cannot be played with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = &self.rules;
        if rules.board_length == 0 {
            return Err(ConfigError::new("board_length must be positive".to_string()));
        }
        if rules.spawn_roll == 0 {
            return Err(ConfigError::new("spawn_roll must be positive".to_string()));
        }
        for (i, &start) in rules.starting_positions.iter().enumerate() {
            if start >= rules.board_length {
                return Err(ConfigError::new(format!(
                    "starting position {start} of {} is off the board",
                    Color::ALL[i]
                )));
            }
            if rules.starting_positions[..i].contains(&start) {
                return Err(ConfigError::new(format!("starting position {start} is used twice")));
            }
        }
        if self.heuristics.risk_reach == 0 {
            return Err(ConfigError::new("risk_reach must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
