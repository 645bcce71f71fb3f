use serde::{Deserialize, Serialize};

use crate::ludo::{Color, MoveKind, Position};

/// Identifies one token on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRef {
    pub color: Color,
    pub token: usize,
}

/// Record of one applied move, for logs and replays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub actor: Color,
    pub token: usize,
    pub dice: u8,
    pub kind: MoveKind,
    /// Where the moved token ended up.
    pub position: Position,
    /// Opposing tokens sent back to base by this move.
    pub captured: Vec<TokenRef>,
}
