//! Move selection: the [`Strategy`] interface, its implementations and the
//! risk heuristic they share.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::Heuristics;
use crate::ludo::{Color, Move, MoveKind, Player, Rules};

mod baseline;
pub use baseline::{FirstLegal, RandomChoice};

mod aggressive;
pub use aggressive::Aggressive;

mod defensive;
pub use defensive::Defensive;

mod smart;
pub use smart::Smart;

mod risk;
pub use risk::risk;

/// Everything a strategy may look at when picking a move. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct Decision<'a> {
    pub color: Color,
    pub dice: u8,
    pub legal_moves: &'a [Move],
    pub players: &'a [Player],
    pub rules: &'a Rules,
    pub heuristics: &'a Heuristics,
}

impl<'a> Decision<'a> {
    /// The acting player.
    pub fn me(&self) -> Option<&'a Player> {
        self.players.iter().find(|p| p.color() == self.color)
    }

    pub fn opponents(&self) -> impl Iterator<Item = &'a Player> + Clone + use<'a> {
        let color = self.color;
        self.players.iter().filter(move |p| p.color() != color)
    }

    /// First legal move of the same kind as `kind`, destination ignored.
    pub fn find(&self, kind: MoveKind) -> Option<Move> {
        self.legal_moves.iter().copied().find(|m| m.kind().same_kind(&kind))
    }

    /// First legal move matching the earliest kind in `ranking`.
    pub fn find_ranked(&self, ranking: &[MoveKind]) -> Option<Move> {
        ranking.iter().find_map(|&kind| self.find(kind))
    }
}

/// A move selection policy.
///
/// Implementations are stateless between calls. Randomness, if any, comes
/// from the caller's generator so seeded runs stay reproducible.
pub trait Strategy: Send + Sync {
    /// Name written to batch logs.
    fn name(&self) -> &'static str;

    /// Picks one of `decision.legal_moves`, or `None` if there is none.
    fn select(&self, decision: &Decision, rng: &mut dyn RngCore) -> Option<Move>;
}

/// The closed set of strategies a seat can be bound to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    clap::ValueEnum, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    FirstLegal,
    Random,
    Aggressive,
    Defensive,
    Smart,
}

static FIRST_LEGAL: FirstLegal = FirstLegal;
static RANDOM: RandomChoice = RandomChoice;
static AGGRESSIVE: Aggressive = Aggressive;
static DEFENSIVE: Defensive = Defensive;
static SMART: Smart = Smart;

impl StrategyKind {
    pub fn strategy(&self) -> &'static dyn Strategy {
        match self {
            StrategyKind::FirstLegal => &FIRST_LEGAL,
            StrategyKind::Random => &RANDOM,
            StrategyKind::Aggressive => &AGGRESSIVE,
            StrategyKind::Defensive => &DEFENSIVE,
            StrategyKind::Smart => &SMART,
        }
    }

    pub fn name(&self) -> &'static str {
        self.strategy().name()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::ludo::Game;

    /// Runs `kind` against the legal moves of `color` in `game`.
    pub fn pick(kind: StrategyKind, game: &Game, color: Color, dice: u8) -> Option<Move> {
        let moves = game.legal_moves(color, dice);
        let heuristics = Heuristics::default();
        let decision = Decision {
            color,
            dice,
            legal_moves: &moves,
            players: game.players(),
            rules: game.rules(),
            heuristics: &heuristics,
        };
        let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(7);
        kind.strategy().select(&decision, &mut rng)
    }
}
