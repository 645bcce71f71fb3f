use crate::config::Heuristics;
use crate::ludo::{Player, Rules, Token};

/// How exposed `token` is to capture on the opponents' next roll.
///
/// Zero off the track. Each opposing on-track token adds
/// `spawn_square_risk` while `token` sits on that opponent's starting square,
/// and 1 if it stands within `risk_reach` squares behind `token` without
/// having to pass its own home entry first.
pub fn risk<'a>(
    token: &Token,
    opponents: impl IntoIterator<Item = &'a Player>,
    rules: &Rules,
    heuristics: &Heuristics,
) -> u32 {
    let Some(square) = token.square() else {
        return 0;
    };

    let mut risk = 0;
    for opponent in opponents {
        let start = opponent.starting_position();
        for hunter in opponent.tokens().iter().filter_map(Token::square) {
            if square == start {
                risk += heuristics.spawn_square_risk;
            }

            let to_home = match rules.distance(hunter, start) {
                0 => rules.board_length,
                d => d,
            };
            let distance = rules.distance(hunter, square);
            if to_home < distance {
                continue;
            }
            if distance > 0 && distance <= heuristics.risk_reach {
                risk += 1;
            }
        }
    }
    risk
}
