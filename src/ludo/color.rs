use serde::{Deserialize, Serialize};

/// Seat colors in fixed turn order. The derived ordering follows the rotation,
/// so ordered maps keyed by [`Color`] list the seats red, green, yellow, blue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// The seat that plays after this one.
    pub fn next(&self) -> Color {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Yellow,
            Color::Yellow => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Single letter used by the text board.
    pub fn initial(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_rotation_visits_every_seat() {
        let mut color = Color::Red;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(color);
            color = color.next();
        }
        assert_eq!(seen, Color::ALL);
        assert_eq!(color, Color::Red);
    }

    #[test]
    fn test_index_matches_rotation() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Color::from_str("Yellow").unwrap(), Color::Yellow);
        assert_eq!(Color::Blue.to_string(), "blue");
    }
}
