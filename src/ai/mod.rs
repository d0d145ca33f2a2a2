use std::fmt::Debug;

use crate::board::{Outcome, Player};
use crate::error::Result;
use crate::replay::MoveLog;
use crate::reversi::Coord;

pub mod config;
pub mod minimax;
pub mod simple;
pub mod tree;

/// Something that can occupy a seat in a [GameSession](crate::game::GameSession).
///
/// The session treats all agents the same way: when it's an agent's turn it calls [PlayerAgent::notify_turn]
/// followed by [PlayerAgent::choose_move]. Agents that decide on the spot return their move immediately,
/// interactive agents return `None` and their move arrives later through
/// [GameSession::submit_move](crate::game::GameSession::submit_move).
pub trait PlayerAgent: Debug {
    /// The seat this agent plays.
    fn player(&self) -> Player;

    /// It's this agent's turn in the game described by `log`.
    fn notify_turn(&mut self, log: &MoveLog);

    /// Pick a move for the position of the last [PlayerAgent::notify_turn] call, or `None` to wait for external input.
    fn choose_move(&mut self) -> Result<Option<Coord>>;

    /// The game this agent was seated in just ended.
    #[allow(unused_variables)]
    fn notify_game_over(&mut self, outcome: Outcome) {}
}

impl<A: PlayerAgent + ?Sized> PlayerAgent for Box<A> {
    fn player(&self) -> Player {
        (**self).player()
    }

    fn notify_turn(&mut self, log: &MoveLog) {
        (**self).notify_turn(log)
    }

    fn choose_move(&mut self) -> Result<Option<Coord>> {
        (**self).choose_move()
    }

    fn notify_game_over(&mut self, outcome: Outcome) {
        (**self).notify_game_over(outcome)
    }
}
