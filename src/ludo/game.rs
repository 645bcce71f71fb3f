use tracing::instrument;

use crate::config::Seats;
use crate::ludo::{
    BoardSnapshot, Color, IllegalReason, MoveError, Player, Position, Rules, Token,
};

/// Full state of one game: the four seats, the rules and whose turn it is.
///
/// [`Game::legal_moves`] and [`Game::apply`] are the only ways the rules read
/// and change token state.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    rules: Rules,
    players: [Player; 4],
    turn: Color,
}

impl Game {
    #[instrument(level = "debug", skip(seats))]
    pub fn new(rules: Rules, seats: &Seats) -> Self {
        let players = Color::ALL.map(|color| {
            Player::new(color, rules.starting_position(color), seats.get(color))
        });
        Game {
            rules,
            players,
            turn: Color::Red,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// All seats in rotation order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub(crate) fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player; 4] {
        &mut self.players
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Hands the turn to the next seat in rotation.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.next();
    }

    pub fn winner(&self) -> Option<Color> {
        self.players.iter().find(|p| p.has_won()).map(Player::color)
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Puts every token back in base, clears the stats and gives red the turn.
    /// Seat and strategy bindings are kept.
    pub fn reset(&mut self) {
        for player in self.players.iter_mut() {
            player.reset();
        }
        self.turn = Color::Red;
    }

    /// Overwrites one token. Used to set up positions; no legality checks.
    pub fn place_token(&mut self, color: Color, index: usize, token: Token) -> Result<(), MoveError> {
        let slot = self
            .player_mut(color)
            .tokens_mut()
            .get_mut(index)
            .ok_or(MoveError::IllegalMove {
                color,
                token: index,
                dice: 0,
                reason: IllegalReason::TokenOutOfRange,
            })?;
        *slot = token;
        Ok(())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_game(self)
    }

    /// Checks the structural invariants of every token.
    ///
    /// Own tokens never share a square or a home slot, home slots stay inside
    /// the column, and `moved_squares` agrees with where each token stands.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        let len = self.rules.board_length as u16;
        for player in &self.players {
            let color = player.color();
            let tokens = player.tokens();
            for (i, token) in tokens.iter().enumerate() {
                let moved = token.moved_squares();
                match token.position() {
                    Position::Base if moved != 0 => {
                        return Err(violation(color, i, format!("in base with {moved} squares moved")));
                    }
                    Position::Base => {}
                    Position::Track(square) => {
                        if square as u16 >= len || moved >= len {
                            return Err(violation(color, i, format!("on square {square} after {moved} squares")));
                        }
                        let expected = self.rules.advance(player.starting_position(), (moved % len) as u8);
                        if expected != square {
                            return Err(violation(color, i, format!("on square {square}, expected {expected}")));
                        }
                    }
                    Position::Home(slot) => {
                        if slot > self.rules.home_length || moved != len + slot as u16 {
                            return Err(violation(color, i, format!("in home slot {slot} after {moved} squares")));
                        }
                    }
                }
                for (j, other) in tokens.iter().enumerate().skip(i + 1) {
                    let shared = match (token.position(), other.position()) {
                        (Position::Track(a), Position::Track(b)) => a == b,
                        (Position::Home(a), Position::Home(b)) => a == b,
                        _ => false,
                    };
                    if shared {
                        return Err(violation(color, i, format!("shares {:?} with token {j}", token.position())));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Rules::default(), &Seats::default())
    }
}

fn violation(color: Color, token: usize, detail: String) -> MoveError {
    MoveError::InvariantViolation(format!("{color} token {token} {detail}"))
}
