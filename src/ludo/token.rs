use serde::{Deserialize, Serialize};

/// Where a token currently is.
///
/// The home slot only exists while the token is in the home column, so a
/// token can never be "in home" without a slot or hold a slot outside home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Waiting in base, not spawned yet.
    Base,
    /// On the shared track.
    Track(u8),
    /// Retired into the home column at the given slot.
    Home(u8),
}

/// A single playing piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    position: Position,
    moved_squares: u16,
}

impl Token {
    /// A token in base.
    pub const fn new() -> Self {
        Token {
            position: Position::Base,
            moved_squares: 0,
        }
    }

    pub const fn on_track(square: u8, moved_squares: u16) -> Self {
        Token {
            position: Position::Track(square),
            moved_squares,
        }
    }

    pub const fn in_home(slot: u8, moved_squares: u16) -> Self {
        Token {
            position: Position::Home(slot),
            moved_squares,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Squares travelled since the last spawn.
    pub fn moved_squares(&self) -> u16 {
        self.moved_squares
    }

    /// The track square, if the token is on the track.
    pub fn square(&self) -> Option<u8> {
        match self.position {
            Position::Track(square) => Some(square),
            _ => None,
        }
    }

    pub fn home_slot(&self) -> Option<u8> {
        match self.position {
            Position::Home(slot) => Some(slot),
            _ => None,
        }
    }

    pub fn is_in_base(&self) -> bool {
        self.position == Position::Base
    }

    pub fn is_on_track(&self) -> bool {
        matches!(self.position, Position::Track(_))
    }

    pub fn is_in_home(&self) -> bool {
        matches!(self.position, Position::Home(_))
    }

    pub(crate) fn spawn(&mut self, square: u8) {
        self.position = Position::Track(square);
        self.moved_squares = 0;
    }

    pub(crate) fn advance_to(&mut self, square: u8, steps: u8) {
        self.position = Position::Track(square);
        self.moved_squares += steps as u16;
    }

    pub(crate) fn enter_home(&mut self, slot: u8, steps: u8) {
        self.position = Position::Home(slot);
        self.moved_squares += steps as u16;
    }

    /// Captured: back to base with all progress lost.
    pub(crate) fn send_to_base(&mut self) {
        *self = Token::new();
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut token = Token::new();
        assert!(token.is_in_base());
        assert_eq!(token.home_slot(), None);

        token.spawn(10);
        assert_eq!(token.square(), Some(10));
        assert_eq!(token.moved_squares(), 0);

        token.advance_to(15, 5);
        assert_eq!(token.position(), Position::Track(15));
        assert_eq!(token.moved_squares(), 5);

        token.send_to_base();
        assert_eq!(token, Token::new());
    }

    #[test]
    fn test_home_slot_only_in_home() {
        let mut token = Token::on_track(38, 38);
        assert!(token.home_slot().is_none());
        token.enter_home(1, 3);
        assert_eq!(token.home_slot(), Some(1));
        assert!(token.is_in_home());
        assert!(token.square().is_none());
        assert_eq!(token.moved_squares(), 41);
    }
}
