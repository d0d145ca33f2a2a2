//! Error types for the reversi crate.

use thiserror::Error;

use crate::board::Player;
use crate::reversi::Coord;

/// Every way an operation on the engine can be refused.
///
/// None of these are fatal: a refused operation never leaves the game in a modified state.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate ({x}, {y}) is outside the board, both must be in 1..=8")]
    InvalidCoordinate { x: u8, y: u8 },

    #[error("{coord} is not a legal move for player {player}")]
    IllegalMove { coord: Coord, player: Player },

    #[error("player {player} tried to move out of turn")]
    OutOfTurn { player: Player },

    #[error("both agents want to play as player {player}")]
    SeatTaken { player: Player },

    #[error("the game is already finished")]
    GameFinished,

    #[error("search was asked to move for player {player}, who has no legal moves")]
    NoLegalMoveForSearch { player: Player },

    #[error("invalid move notation '{0}'")]
    InvalidNotation(String),

    #[error("invalid board diagram '{0}'")]
    InvalidDiagram(String),
}

pub type Result<T> = std::result::Result<T, Error>;
