use std::fmt::Display;

use serde::Serialize;

use crate::engine::StrategyKind;
use crate::ludo::{Color, Game, Position, Stats};

/// Read-only view of one token, for rendering and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenView {
    pub position: Position,
    pub moved_squares: u16,
    pub home_slot: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub color: Color,
    pub strategy: StrategyKind,
    pub starting_position: u8,
    pub tokens: Vec<TokenView>,
    pub stats: Stats,
}

/// Detached copy of the visible board state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub turn: Color,
    pub board_length: u8,
    pub home_length: u8,
    pub winner: Option<Color>,
    pub players: Vec<PlayerView>,
}

impl BoardSnapshot {
    pub fn from_game(game: &Game) -> Self {
        let players = game
            .players()
            .iter()
            .map(|player| PlayerView {
                color: player.color(),
                strategy: player.strategy(),
                starting_position: player.starting_position(),
                tokens: player
                    .tokens()
                    .iter()
                    .map(|t| TokenView {
                        position: t.position(),
                        moved_squares: t.moved_squares(),
                        home_slot: t.home_slot(),
                    })
                    .collect(),
                stats: *player.stats(),
            })
            .collect();

        BoardSnapshot {
            turn: game.turn(),
            board_length: game.rules().board_length,
            home_length: game.rules().home_length,
            winner: game.winner(),
            players,
        }
    }
}

impl Display for BoardSnapshot {
    /// One line for the track, then one line per seat with base and home.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut track = vec!['.'; self.board_length as usize];
        for player in &self.players {
            if let Some(cell) = track.get_mut(player.starting_position as usize) {
                *cell = '+';
            }
        }
        for player in &self.players {
            for token in &player.tokens {
                if let Position::Track(square) = token.position {
                    if let Some(cell) = track.get_mut(square as usize) {
                        *cell = player.color.initial();
                    }
                }
            }
        }
        writeln!(f, "{}", track.iter().collect::<String>())?;

        for player in &self.players {
            let base = player.tokens.iter().filter(|t| t.position == Position::Base).count();
            let mut home = vec!['_'; self.home_length as usize + 1];
            for slot in player.tokens.iter().filter_map(|t| t.home_slot) {
                if let Some(cell) = home.get_mut(slot as usize) {
                    *cell = player.color.initial();
                }
            }
            let marker = if player.color == self.turn { '>' } else { ' ' };
            writeln!(
                f,
                "{marker} {:<6} base {base} home [{}]",
                player.color,
                home.iter().collect::<String>()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ludo::{Color, Game, Token};

    #[test]
    fn test_snapshot_reflects_tokens() {
        let mut game = Game::default();
        game.place_token(Color::Green, 3, Token::in_home(2, 42)).unwrap();
        let snapshot = game.snapshot();
        let green = &snapshot.players[Color::Green.index()];
        assert_eq!(green.tokens[3].home_slot, Some(2));
        assert_eq!(green.tokens[0].home_slot, None);
        assert_eq!(snapshot.turn, Color::Red);
        assert_eq!(snapshot.winner, None);
    }

    #[test]
    fn test_text_board() {
        let mut game = Game::default();
        game.place_token(Color::Red, 0, Token::on_track(3, 3)).unwrap();
        let text = game.snapshot().to_string();
        let track = text.lines().next().unwrap();
        assert_eq!(track.len(), 40);
        assert_eq!(track.chars().nth(3), Some('R'));
        assert_eq!(track.chars().nth(10), Some('+'));
        assert!(text.lines().nth(1).unwrap().starts_with("> red"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(Game::default().snapshot()).unwrap();
        assert_eq!(json["board_length"], 40);
        assert_eq!(json["players"][0]["color"], "red");
        assert_eq!(json["players"][0]["tokens"][0]["position"], "base");
    }
}
