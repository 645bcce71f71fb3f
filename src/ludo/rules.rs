use serde::{Deserialize, Serialize};

use crate::ludo::{Color, Token};

pub const BOARD_LENGTH: u8 = 40;
/// Highest home slot index; the home column holds `HOME_LENGTH + 1` slots.
pub const HOME_LENGTH: u8 = 3;
pub const DIE_FACES: u8 = 6;
pub const STARTING_POSITIONS: [u8; 4] = [0, 10, 20, 30];
/// Extra rolls granted to a player with nothing on the track, looking for a six.
pub const BASE_REROLLS: u8 = 2;

/// Board geometry and the fixed rule constants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub board_length: u8,
    pub home_length: u8,
    /// Entry square per color, indexed by [`Color::index`].
    pub starting_positions: [u8; 4],
    /// The roll that lets a token leave base.
    pub spawn_roll: u8,
    pub base_rerolls: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            board_length: BOARD_LENGTH,
            home_length: HOME_LENGTH,
            starting_positions: STARTING_POSITIONS,
            spawn_roll: DIE_FACES,
            base_rerolls: BASE_REROLLS,
        }
    }
}

/// How far one token would have to travel to land on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// One of the tokens is not on the track.
    OffTrack,
    /// The target is ahead, but the mover would pass its own home entry first.
    Unreachable,
    Within(u8),
}

impl Rules {
    pub fn starting_position(&self, color: Color) -> u8 {
        self.starting_positions[color.index()]
    }

    /// Square reached after walking `steps` squares forward from `square`.
    pub fn advance(&self, square: u8, steps: u8) -> u8 {
        ((square as u16 + steps as u16) % self.board_length as u16) as u8
    }

    /// Forward distance from `from` to `to` along the circular track.
    pub fn distance(&self, from: u8, to: u8) -> u8 {
        let len = self.board_length as u16;
        ((to as u16 + len - from as u16 % len) % len) as u8
    }

    /// Home slot reached by a token that has travelled `travelled` squares in
    /// total, or `None` if it has not completed the track yet.
    pub fn home_offset(&self, travelled: u16) -> Option<u16> {
        travelled.checked_sub(self.board_length as u16)
    }

    /// Distance `from` has to cover to land on `to`, bounded by `from`'s own lap.
    pub fn reach(&self, from: &Token, to: &Token) -> Reach {
        let (Some(a), Some(b)) = (from.square(), to.square()) else {
            return Reach::OffTrack;
        };
        let distance = self.distance(a, b);
        if from.moved_squares() + distance as u16 > self.board_length as u16 {
            Reach::Unreachable
        } else {
            Reach::Within(distance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let rules = Rules::default();
        assert_eq!(rules.advance(38, 4), 2);
        assert_eq!(rules.advance(10, 6), 16);
        assert_eq!(rules.advance(34, 6), 0);
    }

    #[test]
    fn test_distance_is_forward() {
        let rules = Rules::default();
        assert_eq!(rules.distance(10, 12), 2);
        assert_eq!(rules.distance(38, 2), 4);
        assert_eq!(rules.distance(12, 10), 38);
        assert_eq!(rules.distance(5, 5), 0);
    }

    #[test]
    fn test_home_offset() {
        let rules = Rules::default();
        assert_eq!(rules.home_offset(39), None);
        assert_eq!(rules.home_offset(40), Some(0));
        assert_eq!(rules.home_offset(41), Some(1));
    }

    #[test]
    fn test_reach_respects_lap() {
        let rules = Rules::default();
        let hunter = Token::on_track(30, 30);
        assert_eq!(rules.reach(&hunter, &Token::on_track(35, 5)), Reach::Within(5));
        assert_eq!(rules.reach(&hunter, &Token::on_track(15, 5)), Reach::Unreachable);
        assert_eq!(rules.reach(&hunter, &Token::new()), Reach::OffTrack);
    }
}
