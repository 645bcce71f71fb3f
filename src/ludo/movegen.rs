use crate::ludo::{Color, Game, IllegalReason, Move, MoveKind, Player, Position, TOKENS_PER_PLAYER};

impl Game {
    /// All legal moves for `color` with the given roll, in token order.
    ///
    /// A spawn takes precedence over everything else: if any token may
    /// spawn, the result is exactly that one spawn move.
    pub fn legal_moves(&self, color: Color, dice: u8) -> Vec<Move> {
        let mut moves = Vec::with_capacity(TOKENS_PER_PLAYER);
        for index in 0..TOKENS_PER_PLAYER {
            match self.classify(color, index, dice) {
                Ok(MoveKind::Spawn) => return vec![Move::new(index, MoveKind::Spawn)],
                Ok(kind) => moves.push(Move::new(index, kind)),
                Err(_) => {}
            }
        }
        moves
    }

    /// Decides what moving token `index` by `dice` squares would do.
    /// Shared by the enumerator and the executor so both always agree.
    pub(crate) fn classify(&self, color: Color, index: usize, dice: u8) -> Result<MoveKind, IllegalReason> {
        let rules = self.rules();
        let player = self.player(color);
        let token = player.token(index).ok_or(IllegalReason::TokenOutOfRange)?;
        let travelled = token.moved_squares() + dice as u16;

        match token.position() {
            Position::Base => {
                if dice != rules.spawn_roll {
                    Err(IllegalReason::NeedsSpawnRoll)
                } else if player.occupies(player.starting_position()) {
                    Err(IllegalReason::SpawnBlocked)
                } else {
                    Ok(MoveKind::Spawn)
                }
            }
            Position::Track(square) if travelled < rules.board_length as u16 => {
                let destination = rules.advance(square, dice);
                if player.occupies(destination) {
                    Err(IllegalReason::SelfBlocked)
                } else if self.opponent_on(color, destination) {
                    Ok(MoveKind::Capture(destination))
                } else {
                    Ok(MoveKind::MoveToPosition(destination))
                }
            }
            Position::Track(_) => self.classify_home(player, index, None, travelled),
            Position::Home(slot) => self.classify_home(player, index, Some(slot), travelled),
        }
    }

    /// Entry into, or advance inside, the home column.
    ///
    /// Tokens ahead of the mover (every home token when entering) block both
    /// their own slot and everything beyond it: the column is first-in,
    /// order-preserving.
    fn classify_home(
        &self,
        player: &Player,
        index: usize,
        current: Option<u8>,
        travelled: u16,
    ) -> Result<MoveKind, IllegalReason> {
        let rules = self.rules();
        let offset = rules
            .home_offset(travelled)
            .filter(|&offset| offset <= rules.home_length as u16)
            .ok_or(IllegalReason::Overshoots)?;
        let target = offset as u8;

        let ahead: Vec<u8> = player
            .tokens()
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .filter_map(|(_, t)| t.home_slot())
            .filter(|&slot| current.is_none_or(|c| slot > c))
            .collect();

        if ahead.contains(&target) {
            return Err(IllegalReason::HomeSlotOccupied);
        }
        if ahead.iter().any(|&slot| slot < target) {
            return Err(IllegalReason::SkipsHomeToken);
        }

        Ok(match current {
            Some(_) => MoveKind::MoveWithinHome(target),
            None => MoveKind::MoveToHome(target),
        })
    }

    /// Whether any other color has a token on `square`.
    pub(crate) fn opponent_on(&self, color: Color, square: u8) -> bool {
        self.players()
            .iter()
            .filter(|p| p.color() != color)
            .any(|p| p.occupies(square))
    }
}
