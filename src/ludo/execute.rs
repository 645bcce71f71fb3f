use tracing::{debug, instrument};

use crate::ludo::{Color, Game, MoveError, MoveEvent, MoveKind, Position, TokenRef};

impl Game {
    /// Moves token `index` of `color` by `dice` squares.
    ///
    /// Legality is re-derived from the current board rather than trusted from
    /// an earlier [`Game::legal_moves`] call. On failure nothing changes.
    /// On success the mover's stats are updated and any opposing token left on
    /// the destination square is captured.
    #[instrument(level = "trace", skip(self))]
    pub fn apply(&mut self, color: Color, index: usize, dice: u8) -> Result<MoveEvent, MoveError> {
        let kind = self
            .classify(color, index, dice)
            .map_err(|reason| MoveError::IllegalMove {
                color,
                token: index,
                dice,
                reason,
            })?;

        let player = self.player_mut(color);
        let start = player.starting_position();
        let token = &mut player.tokens_mut()[index];
        match kind {
            MoveKind::Spawn => token.spawn(start),
            MoveKind::MoveToPosition(square) | MoveKind::Capture(square) => token.advance_to(square, dice),
            MoveKind::MoveToHome(slot) | MoveKind::MoveWithinHome(slot) => token.enter_home(slot, dice),
        }
        let position = token.position();

        let stats = player.stats_mut();
        stats.turns_taken += 1;
        stats.total_squares_moved += dice as u32;
        if kind == MoveKind::Spawn {
            stats.spawns += 1;
        }

        let captured = match position {
            Position::Track(square) => self.capture_on(color, square),
            _ => Vec::new(),
        };

        debug!(%color, token = index, dice, ?kind, captured = captured.len(), "move applied");
        Ok(MoveEvent {
            actor: color,
            token: index,
            dice,
            kind,
            position,
            captured,
        })
    }

    /// Sends every opposing token on `square` back to base.
    fn capture_on(&mut self, attacker: Color, square: u8) -> Vec<TokenRef> {
        let mut captured = Vec::new();
        for player in self.players_mut().iter_mut().filter(|p| p.color() != attacker) {
            let color = player.color();
            let before = captured.len();
            for (index, token) in player.tokens_mut().iter_mut().enumerate() {
                if token.square() == Some(square) {
                    token.send_to_base();
                    captured.push(TokenRef { color, token: index });
                }
            }
            let lost = (captured.len() - before) as u32;
            player.stats_mut().own_tokens_captured += lost;
            if lost > 0 {
                debug!(%attacker, victim = %color, square, lost, "tokens captured");
            }
        }
        self.player_mut(attacker).stats_mut().tokens_captured += captured.len() as u32;
        captured
    }
}

#[cfg(test)]
mod tests {
    use crate::ludo::{Color, Game, IllegalReason, MoveError, MoveKind, Position, Token, TokenRef};

    #[test]
    fn test_spawn() {
        let mut game = Game::default();
        let event = game.apply(Color::Red, 0, 6).unwrap();
        assert_eq!(event.kind, MoveKind::Spawn);
        let token = game.player(Color::Red).tokens()[0];
        assert_eq!(token.position(), Position::Track(0));
        assert_eq!(token.moved_squares(), 0);
        let stats = game.player(Color::Red).stats();
        assert_eq!(stats.spawns, 1);
        assert_eq!(stats.turns_taken, 1);
        assert_eq!(stats.total_squares_moved, 6);
    }

    #[test]
    fn test_capture_resets_victim() {
        let mut game = Game::default();
        game.place_token(Color::Red, 0, Token::on_track(10, 10)).unwrap();
        game.place_token(Color::Green, 0, Token::on_track(12, 2)).unwrap();

        let event = game.apply(Color::Red, 0, 2).unwrap();

        assert_eq!(event.kind, MoveKind::Capture(12));
        assert_eq!(event.captured, vec![TokenRef { color: Color::Green, token: 0 }]);
        let victim = game.player(Color::Green).tokens()[0];
        assert_eq!(victim.position(), Position::Base);
        assert_eq!(victim.moved_squares(), 0);
        assert_eq!(victim.home_slot(), None);
        assert_eq!(game.player(Color::Red).stats().tokens_captured, 1);
        assert_eq!(game.player(Color::Green).stats().own_tokens_captured, 1);
    }

    #[test]
    fn test_spawn_captures_opponent_on_start() {
        let mut game = Game::default();
        game.place_token(Color::Blue, 2, Token::on_track(10, 20)).unwrap();
        let event = game.apply(Color::Green, 0, 6).unwrap();
        assert_eq!(event.kind, MoveKind::Spawn);
        assert_eq!(event.captured, vec![TokenRef { color: Color::Blue, token: 2 }]);
    }

    #[test]
    fn test_captures_every_stacked_opponent() {
        let mut game = Game::default();
        game.place_token(Color::Red, 0, Token::on_track(20, 20)).unwrap();
        game.place_token(Color::Green, 0, Token::on_track(24, 14)).unwrap();
        game.place_token(Color::Blue, 3, Token::on_track(24, 34)).unwrap();
        let event = game.apply(Color::Red, 0, 4).unwrap();
        assert_eq!(event.captured.len(), 2);
        assert_eq!(game.player(Color::Red).stats().tokens_captured, 2);
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let mut game = Game::default();
        let before = game.clone();
        let err = game.apply(Color::Red, 0, 3).unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalMove {
                color: Color::Red,
                token: 0,
                dice: 3,
                reason: IllegalReason::NeedsSpawnRoll,
            }
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_enter_and_advance_home() {
        let mut game = Game::default();
        game.place_token(Color::Yellow, 1, Token::on_track(15, 35)).unwrap();
        game.apply(Color::Yellow, 1, 6).unwrap();
        let token = game.player(Color::Yellow).tokens()[1];
        assert_eq!(token.home_slot(), Some(1));
        assert_eq!(token.moved_squares(), 41);

        let event = game.apply(Color::Yellow, 1, 2).unwrap();
        assert_eq!(event.kind, MoveKind::MoveWithinHome(3));
        assert!(game.check_invariants().is_ok());
    }
}
