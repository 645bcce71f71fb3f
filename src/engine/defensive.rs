use rand::RngCore;

use crate::engine::{Decision, Strategy};
use crate::ludo::{Move, MoveKind};

/// Brings up the laggards: moves the track token that has travelled least,
/// leaving advanced tokens where they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defensive;

impl Strategy for Defensive {
    fn name(&self) -> &'static str {
        "DefensiveStrategy"
    }

    fn select(&self, decision: &Decision, _rng: &mut dyn RngCore) -> Option<Move> {
        if let [only] = decision.legal_moves {
            return Some(*only);
        }

        let me = decision.me()?;
        let mut best: Option<(Move, u16)> = None;
        for &candidate in decision.legal_moves.iter().filter(|m| m.kind().is_track_move()) {
            let moved = me.token(candidate.token())?.moved_squares();
            if best.is_none_or(|(_, fewest)| moved < fewest) {
                best = Some((candidate, moved));
            }
        }

        best.map(|(m, _)| m).or_else(|| {
            decision.find_ranked(&[MoveKind::MoveToHome(0), MoveKind::MoveWithinHome(0)])
        })
    }
}
