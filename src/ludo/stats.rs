use serde::{Deserialize, Serialize};

/// Per-player counters for one game, or summed over a batch.
///
/// Field names are part of the batch log format and must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Successful moves made (spawns included).
    pub turns_taken: u32,
    /// Opposing tokens sent back to base.
    pub tokens_captured: u32,
    /// Own tokens lost to opponents.
    pub own_tokens_captured: u32,
    pub spawns: u32,
    /// Sum of the dice values of all successful moves.
    pub total_squares_moved: u32,
    pub games_won: u32,
    /// `turns_taken` at the winning move for a single game, zero for the
    /// losers. Summed over the won games in a batch total.
    pub turns_until_win: u32,
}

impl Stats {
    pub fn reset(&mut self) {
        *self = Stats::default();
    }

    /// Adds one finished game to a running batch total.
    pub fn accumulate(&mut self, game: &Stats, won: bool) {
        self.turns_taken += game.turns_taken;
        self.tokens_captured += game.tokens_captured;
        self.own_tokens_captured += game.own_tokens_captured;
        self.spawns += game.spawns;
        self.total_squares_moved += game.total_squares_moved;
        if won {
            self.games_won += 1;
            self.turns_until_win += game.turns_taken;
        }
    }
}
