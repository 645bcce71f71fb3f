use serde::Serialize;

use crate::engine::StrategyKind;
use crate::ludo::{Color, Stats, Token};

pub const TOKENS_PER_PLAYER: usize = 4;

/// One seat at the table: four tokens, an entry square and a strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    color: Color,
    tokens: [Token; TOKENS_PER_PLAYER],
    starting_position: u8,
    strategy: StrategyKind,
    stats: Stats,
}

impl Player {
    pub fn new(color: Color, starting_position: u8, strategy: StrategyKind) -> Self {
        Player {
            color,
            tokens: [Token::new(); TOKENS_PER_PLAYER],
            starting_position,
            strategy,
            stats: Stats::default(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn tokens(&self) -> &[Token; TOKENS_PER_PLAYER] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn starting_position(&self) -> u8 {
        self.starting_position
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut [Token; TOKENS_PER_PLAYER] {
        &mut self.tokens
    }

    pub(crate) fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    /// A player has won once every token is in the home column.
    pub fn has_won(&self) -> bool {
        self.tokens.iter().all(Token::is_in_home)
    }

    /// Whether one of this player's tokens stands on `square`.
    pub fn occupies(&self, square: u8) -> bool {
        self.tokens.iter().any(|t| t.square() == Some(square))
    }

    pub fn tokens_on_track(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_on_track()).count()
    }

    /// Sends every token back to base and clears the stats.
    pub(crate) fn reset(&mut self) {
        self.tokens = [Token::new(); TOKENS_PER_PLAYER];
        self.stats.reset();
    }
}
