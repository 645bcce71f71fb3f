use rand::RngCore;
use tracing::trace;

use crate::engine::{Decision, Strategy, risk};
use crate::ludo::{Move, MoveKind, Token};

/// Risk minimizer: plays the move that most reduces the moved token's
/// exposure, favouring captures and then plain track moves on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct Smart;

const FALLBACK: [MoveKind; 5] = [
    MoveKind::MoveToHome(0),
    MoveKind::Capture(0),
    MoveKind::MoveWithinHome(0),
    MoveKind::MoveToPosition(0),
    MoveKind::Spawn,
];

impl Smart {
    /// Risk reduction for moving `token`, nudged by how far it has come.
    fn reduction(&self, decision: &Decision, token: &Token, candidate: Move) -> f64 {
        let rules = decision.rules;
        let exposure = |t: &Token| risk(t, decision.opponents(), rules, decision.heuristics) as f64;

        let after = match candidate.kind() {
            MoveKind::MoveToPosition(square) | MoveKind::Capture(square) => {
                exposure(&Token::on_track(square, token.moved_squares() + decision.dice as u16))
            }
            MoveKind::Spawn => decision
                .me()
                .map_or(0.0, |me| exposure(&Token::on_track(me.starting_position(), 0))),
            MoveKind::MoveToHome(_) | MoveKind::MoveWithinHome(_) => 0.0,
        };

        let reduction = exposure(token) - after;
        let divisor = rules.board_length as f64 * decision.heuristics.progress_weight_divisor as f64;
        let progress = if divisor > 0.0 {
            token.moved_squares() as f64 / divisor
        } else {
            0.0
        };
        if reduction >= 0.0 {
            reduction + progress
        } else {
            reduction - progress
        }
    }
}

impl Strategy for Smart {
    fn name(&self) -> &'static str {
        "SmartStrategy"
    }

    fn select(&self, decision: &Decision, _rng: &mut dyn RngCore) -> Option<Move> {
        let me = decision.me()?;

        let mut best: Option<Move> = None;
        let mut best_reduction = 0.0;
        for &candidate in decision.legal_moves {
            let token = me.token(candidate.token())?;
            let reduction = self.reduction(decision, token, candidate);
            trace!(color = %decision.color, %candidate, reduction, "smart reduction");

            let kind = candidate.kind();
            let take = if reduction > best_reduction {
                true
            } else if reduction == best_reduction {
                match kind {
                    MoveKind::Capture(_) => true,
                    MoveKind::MoveToPosition(_) => !best.is_some_and(|b| b.kind().is_capture()),
                    _ => false,
                }
            } else {
                false
            };
            if take {
                best = Some(candidate);
                best_reduction = reduction;
            }
        }

        best.or_else(|| decision.find_ranked(&FALLBACK))
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::StrategyKind;
    use crate::engine::test_support::pick;
    use crate::ludo::{Color, Game, Move, MoveKind, Token};

    #[test]
    fn test_threatened_token_retreats_home() {
        let mut game = Game::default();
        game.place_token(Color::Yellow, 0, Token::on_track(17, 37)).unwrap();
        game.place_token(Color::Yellow, 1, Token::on_track(25, 5)).unwrap();
        game.place_token(Color::Blue, 0, Token::on_track(16, 26)).unwrap();
        game.place_token(Color::Blue, 1, Token::on_track(14, 24)).unwrap();

        let chosen = pick(StrategyKind::Smart, &game, Color::Yellow, 3).unwrap();
        assert_eq!(chosen, Move::new(0, MoveKind::MoveToHome(0)));
    }

    #[test]
    fn test_escapes_hunter() {
        let mut game = Game::default();
        // token 0 is 2 ahead of red; token 1 is safe either way
        game.place_token(Color::Yellow, 0, Token::on_track(27, 7)).unwrap();
        game.place_token(Color::Yellow, 1, Token::on_track(34, 14)).unwrap();
        game.place_token(Color::Red, 0, Token::on_track(25, 25)).unwrap();

        let chosen = pick(StrategyKind::Smart, &game, Color::Yellow, 5).unwrap();
        assert_eq!(chosen, Move::new(0, MoveKind::MoveToPosition(32)));
    }

    #[test]
    fn test_progress_breaks_even_risk() {
        let mut game = Game::default();
        game.place_token(Color::Yellow, 0, Token::on_track(22, 2)).unwrap();
        game.place_token(Color::Yellow, 1, Token::on_track(30, 10)).unwrap();

        let chosen = pick(StrategyKind::Smart, &game, Color::Yellow, 3).unwrap();
        assert_eq!(chosen, Move::new(1, MoveKind::MoveToPosition(33)));
    }

    #[test]
    fn test_spawn_into_danger_still_played() {
        let mut game = Game::default();
        game.place_token(Color::Green, 0, Token::on_track(17, 7)).unwrap();
        let chosen = pick(StrategyKind::Smart, &game, Color::Yellow, 6).unwrap();
        assert_eq!(chosen, Move::new(0, MoveKind::Spawn));
    }
}
