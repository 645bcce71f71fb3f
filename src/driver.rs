//! Turn sequencing for a single game.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument, trace, warn};

use crate::config::{Heuristics, SimulationConfig};
use crate::engine::Decision;
use crate::ludo::{Color, Game, Move, MoveError, MoveEvent, Stats};

/// Where the driver is within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingRoll,
    AwaitingMove { dice: u8 },
    /// The roll has been played. `extra_turn` keeps the same color on roll.
    Resolved { extra_turn: bool },
    /// Terminal. `winner` is `None` only when a turn limit cut the game short.
    GameOver { winner: Option<Color> },
}

/// What became of one roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved(MoveEvent),
    /// No legal move; the turn passes.
    Forfeited,
    /// The chosen move failed re-validation. Nothing changed; the turn passes.
    Rejected(MoveError),
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameReport {
    pub winner: Option<Color>,
    /// Dice rolls played, re-rolls not counted.
    pub rolls: u32,
    /// Per-color stats in rotation order.
    pub stats: [Stats; 4],
    /// Every applied move, kept only in verbose mode.
    pub events: Vec<MoveEvent>,
}

/// Plays games turn by turn with dice from `R`.
pub struct Driver<R> {
    rng: R,
    heuristics: Heuristics,
    turn_limit: Option<u32>,
    verbose: bool,
    state: TurnState,
}

impl<R: Rng> Driver<R> {
    /// `config` is expected to have passed [`SimulationConfig::validate`].
    pub fn new(rng: R, config: &SimulationConfig) -> Self {
        Driver {
            rng,
            heuristics: config.heuristics,
            turn_limit: config.turn_limit,
            verbose: config.verbose,
            state: TurnState::AwaitingRoll,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Rolls for the player on turn.
    ///
    /// A player with nothing on the track gets up to `base_rerolls` more tries
    /// while the roll is not the spawn roll.
    pub fn roll(&mut self, game: &Game) -> u8 {
        let rules = game.rules();
        let mut dice = self.rng.random_range(1..=rules.spawn_roll);
        if game.player(game.turn()).tokens_on_track() == 0 {
            for _ in 0..rules.base_rerolls {
                if dice == rules.spawn_roll {
                    break;
                }
                trace!(color = %game.turn(), dice, "re-rolling from base");
                dice = self.rng.random_range(1..=rules.spawn_roll);
            }
        }
        self.state = TurnState::AwaitingMove { dice };
        dice
    }

    /// Lets the player on turn pick and play a move for `dice`, then decides
    /// who rolls next.
    pub fn resolve(&mut self, game: &mut Game, dice: u8) -> TurnOutcome {
        let color = game.turn();
        let legal_moves = game.legal_moves(color, dice);
        let chosen = {
            let decision = Decision {
                color,
                dice,
                legal_moves: &legal_moves,
                players: game.players(),
                rules: game.rules(),
                heuristics: &self.heuristics,
            };
            game.player(color).strategy().strategy().select(&decision, &mut self.rng)
        };

        let Some(chosen) = chosen else {
            trace!(%color, dice, "no legal move");
            game.advance_turn();
            self.state = TurnState::Resolved { extra_turn: false };
            return TurnOutcome::Forfeited;
        };

        self.play_move(game, chosen, dice)
    }

    /// Plays `chosen` for the player on turn and decides who rolls next.
    ///
    /// The move is re-validated against the current board. A stale or
    /// illegal move leaves the board untouched and passes the turn.
    pub fn play_move(&mut self, game: &mut Game, chosen: Move, dice: u8) -> TurnOutcome {
        let color = game.turn();
        match game.apply(color, chosen.token(), dice) {
            Ok(event) => {
                debug_assert!(game.check_invariants().is_ok(), "{:?}", game.check_invariants());
                if game.player(color).has_won() {
                    let stats = game.player_mut(color).stats_mut();
                    stats.games_won += 1;
                    stats.turns_until_win = stats.turns_taken;
                    debug!(%color, "game won");
                    self.state = TurnState::GameOver { winner: Some(color) };
                    return TurnOutcome::Moved(event);
                }
                let extra_turn = dice == game.rules().spawn_roll;
                if !extra_turn {
                    game.advance_turn();
                }
                self.state = TurnState::Resolved { extra_turn };
                TurnOutcome::Moved(event)
            }
            Err(err) => {
                warn!(%color, %chosen, error = %err, "strategy chose an illegal move");
                game.advance_turn();
                self.state = TurnState::Resolved { extra_turn: false };
                TurnOutcome::Rejected(err)
            }
        }
    }

    /// One roll for the player on turn, start to finish.
    pub fn play_turn(&mut self, game: &mut Game) -> TurnOutcome {
        self.state = TurnState::AwaitingRoll;
        let dice = self.roll(game);
        self.resolve(game, dice)
    }

    /// Plays `game` from its current position until someone wins or the turn
    /// limit is hit.
    #[instrument(level = "debug", skip_all)]
    pub fn play(&mut self, game: &mut Game) -> GameReport {
        let mut events = Vec::new();
        let mut rolls = 0u32;
        self.state = TurnState::AwaitingRoll;

        loop {
            if let Some(winner) = game.winner() {
                self.state = TurnState::GameOver { winner: Some(winner) };
                break;
            }
            if self.turn_limit.is_some_and(|limit| rolls >= limit) {
                warn!(rolls, "turn limit reached without a winner");
                self.state = TurnState::GameOver { winner: None };
                break;
            }

            let outcome = self.play_turn(game);
            rolls += 1;
            if let TurnOutcome::Moved(event) = outcome {
                if self.verbose {
                    events.push(event);
                }
            }
        }

        let winner = match self.state {
            TurnState::GameOver { winner } => winner,
            _ => None,
        };
        debug!(?winner, rolls, "game finished");
        GameReport {
            winner,
            rolls,
            stats: Color::ALL.map(|c| *game.player(c).stats()),
            events,
        }
    }
}
