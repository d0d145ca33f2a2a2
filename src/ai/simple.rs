//! Two simple agents: `HumanAgent` and `RandomAgent`.
use std::fmt::{Debug, Formatter};

use internal_iterator::InternalIterator;
use rand::Rng;

use crate::ai::PlayerAgent;
use crate::board::Player;
use crate::error::{Error, Result};
use crate::replay::MoveLog;
use crate::reversi::{Coord, ReversiBoard};

/// Agent for an interactive player. It never picks a move itself, the move has to be submitted to the session.
/// Whether the session is waiting for this player is answered by
/// [GameSession::current_player](crate::game::GameSession::current_player).
#[derive(Debug)]
pub struct HumanAgent {
    player: Player,
}

impl HumanAgent {
    pub fn new(player: Player) -> Self {
        HumanAgent { player }
    }
}

impl PlayerAgent for HumanAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn notify_turn(&mut self, _: &MoveLog) {}

    fn choose_move(&mut self) -> Result<Option<Coord>> {
        Ok(None)
    }
}

/// Agent that chooses moves randomly uniformly among the legal moves.
pub struct RandomAgent<R: Rng> {
    player: Player,
    rng: R,
    board: ReversiBoard,
}

impl<R: Rng> Debug for RandomAgent<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomAgent {{ player: {} }}", self.player)
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(player: Player, rng: R) -> Self {
        RandomAgent {
            player,
            rng,
            board: ReversiBoard::default(),
        }
    }
}

impl<R: Rng> PlayerAgent for RandomAgent<R> {
    fn player(&self) -> Player {
        self.player
    }

    fn notify_turn(&mut self, log: &MoveLog) {
        self.board = log.replay_all();
    }

    fn choose_move(&mut self) -> Result<Option<Coord>> {
        let count = self.board.available_moves(self.player).count();
        if count == 0 {
            return Err(Error::NoLegalMoveForSearch { player: self.player });
        }

        let index = self.rng.gen_range(0..count);
        Ok(self.board.available_moves(self.player).nth(index))
    }
}
