use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::engine::{Decision, Strategy};
use crate::ludo::Move;

/// Always plays the first enumerated move.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegal;

impl Strategy for FirstLegal {
    fn name(&self) -> &'static str {
        "FirstLegalStrategy"
    }

    fn select(&self, decision: &Decision, _rng: &mut dyn RngCore) -> Option<Move> {
        decision.legal_moves.first().copied()
    }
}

/// Uniform choice among the legal moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChoice;

impl Strategy for RandomChoice {
    fn name(&self) -> &'static str {
        "RandomStrategy"
    }

    fn select(&self, decision: &Decision, rng: &mut dyn RngCore) -> Option<Move> {
        decision.legal_moves.choose(rng).copied()
    }
}
