use rand::RngCore;
use tracing::trace;

use crate::engine::{Decision, Strategy};
use crate::ludo::{Move, MoveKind, Reach, Token};

/// Hunts opposing tokens.
///
/// Captures whenever it can. Otherwise it scores each plain track move by how
/// close the moved token ends up behind the opponents it can still reach,
/// and penalizes moves that leave a previously reachable target out of reach.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggressive;

impl Aggressive {
    /// Average threat posed by `token` after moving to `destination`.
    fn threat(&self, decision: &Decision, token: &Token, destination: u8) -> f64 {
        let rules = decision.rules;
        let heuristics = decision.heuristics;
        let roll = rules.spawn_roll.max(1) as f64;
        let moved = Token::on_track(destination, token.moved_squares() + decision.dice as u16);

        let mut score = 0.0;
        let mut counted = 0usize;
        let targets = decision.opponents().flat_map(|p| p.tokens().iter());
        for target in targets {
            match rules.reach(&moved, target) {
                Reach::OffTrack => {}
                Reach::Unreachable => {
                    if rules.reach(token, target) != Reach::Unreachable {
                        score -= heuristics.out_of_reach_penalty;
                        counted += 1;
                    }
                }
                Reach::Within(distance) => {
                    let rolls = (distance as f64 / roll).ceil().max(1.0);
                    score += heuristics.threat_weight / rolls;
                    counted += 1;
                }
            }
        }

        if counted > 0 {
            score / counted as f64
        } else {
            score
        }
    }
}

impl Strategy for Aggressive {
    fn name(&self) -> &'static str {
        "AggressiveStrategy"
    }

    fn select(&self, decision: &Decision, _rng: &mut dyn RngCore) -> Option<Move> {
        if let [only] = decision.legal_moves {
            return Some(*only);
        }
        if let Some(capture) = decision.find(MoveKind::Capture(0)) {
            return Some(capture);
        }

        let me = decision.me()?;
        let mut best: Option<(Move, f64)> = None;
        for &candidate in decision.legal_moves {
            let MoveKind::MoveToPosition(destination) = candidate.kind() else {
                continue;
            };
            let token = me.token(candidate.token())?;
            let score = self.threat(decision, token, destination);
            trace!(color = %decision.color, %candidate, score, "aggressive weight");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((candidate, score));
            }
        }

        best.map(|(m, _)| m).or_else(|| {
            decision.find_ranked(&[MoveKind::MoveToHome(0), MoveKind::MoveWithinHome(0)])
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::StrategyKind;
    use crate::engine::test_support::pick;
    use crate::ludo::{Color, Game, Move, MoveKind, Token};

    #[test]
    fn test_prefers_capture() {
        let mut game = Game::default();
        game.place_token(Color::Red, 0, Token::on_track(3, 3)).unwrap();
        game.place_token(Color::Red, 1, Token::on_track(20, 20)).unwrap();
        game.place_token(Color::Yellow, 0, Token::on_track(24, 4)).unwrap();
        let chosen = pick(StrategyKind::Aggressive, &game, Color::Red, 4).unwrap();
        assert_eq!(chosen, Move::new(1, MoveKind::Capture(24)));
    }

    #[test]
    fn test_closes_in_on_target() {
        let mut game = Game::default();
        // token 0 lands 2 behind green, token 1 lands far from everything
        game.place_token(Color::Red, 0, Token::on_track(12, 12)).unwrap();
        game.place_token(Color::Red, 1, Token::on_track(30, 30)).unwrap();
        game.place_token(Color::Green, 0, Token::on_track(17, 7)).unwrap();
        let chosen = pick(StrategyKind::Aggressive, &game, Color::Red, 3).unwrap();
        assert_eq!(chosen, Move::new(0, MoveKind::MoveToPosition(15)));
    }

    #[test]
    fn test_avoids_running_out_of_reach() {
        let mut game = Game::default();
        // token 1 would pass its home entry and lose the target behind it
        game.place_token(Color::Red, 0, Token::on_track(4, 4)).unwrap();
        game.place_token(Color::Red, 1, Token::on_track(34, 34)).unwrap();
        game.place_token(Color::Blue, 0, Token::on_track(38, 8)).unwrap();
        let chosen = pick(StrategyKind::Aggressive, &game, Color::Red, 5).unwrap();
        assert_eq!(chosen.token(), 0);
    }

    #[test]
    fn test_falls_back_to_home() {
        let mut game = Game::default();
        game.place_token(Color::Red, 0, Token::in_home(1, 41)).unwrap();
        game.place_token(Color::Red, 1, Token::on_track(38, 38)).unwrap();
        let chosen = pick(StrategyKind::Aggressive, &game, Color::Red, 2).unwrap();
        assert_eq!(chosen, Move::new(1, MoveKind::MoveToHome(0)));
    }
}
