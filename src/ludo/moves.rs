use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// What a legal move does to its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "to", rename_all = "snake_case")]
pub enum MoveKind {
    /// Leave base onto the starting square.
    Spawn,
    /// Advance along the track to a free square.
    MoveToPosition(u8),
    /// Finish the lap and enter the home column at the given slot.
    MoveToHome(u8),
    /// Advance inside the home column to the given slot.
    MoveWithinHome(u8),
    /// Advance onto a square held by an opponent.
    Capture(u8),
}

impl MoveKind {
    pub fn is_capture(&self) -> bool {
        matches!(self, MoveKind::Capture(_))
    }

    /// Moves that end on the shared track.
    pub fn is_track_move(&self) -> bool {
        matches!(self, MoveKind::MoveToPosition(_) | MoveKind::Capture(_))
    }

    pub fn is_home_move(&self) -> bool {
        matches!(self, MoveKind::MoveToHome(_) | MoveKind::MoveWithinHome(_))
    }

    /// Same variant, ignoring the destination.
    pub fn same_kind(&self, other: &MoveKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A legal move: which token, and what happens to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    token: usize,
    kind: MoveKind,
}

impl Move {
    pub fn new(token: usize, kind: MoveKind) -> Self {
        Move { token, kind }
    }

    pub fn token(&self) -> usize {
        self.token
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Spawn => write!(f, "token {} spawns", self.token),
            MoveKind::MoveToPosition(to) => write!(f, "token {} -> {}", self.token, to),
            MoveKind::Capture(to) => write!(f, "token {} captures on {}", self.token, to),
            MoveKind::MoveToHome(slot) => write!(f, "token {} enters home slot {}", self.token, slot),
            MoveKind::MoveWithinHome(slot) => write!(f, "token {} -> home slot {}", self.token, slot),
        }
    }
}
