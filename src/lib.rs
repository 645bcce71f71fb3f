#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod driver;
pub mod engine;
pub mod ludo;

pub use batch::{BatchSeries, BatchSummary, ReportError, run_batch, write_json};
pub use config::{ConfigError, Heuristics, Seats, SimulationConfig};
pub use driver::{Driver, GameReport, TurnOutcome, TurnState};
pub use engine::{Decision, Strategy, StrategyKind};
