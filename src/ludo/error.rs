use derive_more::Display;

use crate::ludo::Color;

/// The legality predicate a rejected move failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalReason {
    #[display("no such token")]
    TokenOutOfRange,
    #[display("a token can only leave base on the spawn roll")]
    NeedsSpawnRoll,
    #[display("an own token already stands on the starting square")]
    SpawnBlocked,
    #[display("an own token already stands on the destination square")]
    SelfBlocked,
    #[display("the roll overshoots the home column")]
    Overshoots,
    #[display("the target home slot is taken by an own token")]
    HomeSlotOccupied,
    #[display("the move would jump over an own token in the home column")]
    SkipsHomeToken,
}

/// Failure reported by the move executor.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The move failed legality re-validation. The turn is skipped; the game goes on.
    #[display("illegal move by {color} token {token} with roll {dice}: {reason}")]
    IllegalMove {
        color: Color,
        token: usize,
        dice: u8,
        reason: IllegalReason,
    },

    /// Board state that the rules can never produce. Indicates an executor bug.
    #[display("invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::IllegalMove { .. })
    }
}
