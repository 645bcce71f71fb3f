mod color;
pub use color::Color;

mod rules;
pub use rules::{Reach, Rules};
pub use rules::{BASE_REROLLS, BOARD_LENGTH, DIE_FACES, HOME_LENGTH, STARTING_POSITIONS};

mod token;
pub use token::{Position, Token};

mod stats;
pub use stats::Stats;

mod player;
pub use player::{Player, TOKENS_PER_PLAYER};

mod moves;
pub use moves::{Move, MoveKind};

mod error;
pub use error::{IllegalReason, MoveError};

mod event;
pub use event::{MoveEvent, TokenRef};

mod snapshot;
pub use snapshot::{BoardSnapshot, PlayerView, TokenView};

mod game;
pub use game::Game;

mod movegen;
mod execute;
