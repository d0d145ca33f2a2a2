#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A Reversi (Othello) engine together with a bounded minimax AI.
//!
//! # Overview
//!
//! * [ReversiBoard](crate::reversi::ReversiBoard) is the 8x8 board: move legality, flipping and scoring.
//! * [MoveLog](crate::replay::MoveLog) is the history of a game. Boards are never copied, every alternate state
//!     is obtained by replaying (a prefix of) a move log from its start [Layout](crate::reversi::Layout).
//! * [GameSession](crate::game::GameSession) runs a game: it validates moves, handles passes and the end of the
//!     game, and hands the turn to the [PlayerAgent](crate::ai::PlayerAgent) seated for the player to act.
//!     Observers get a [Snapshot](crate::game::Snapshot) after every change.
//! * Agents:
//!     * [HumanAgent](crate::ai::simple::HumanAgent),
//!         which waits for its moves to be submitted from the outside.
//!     * [RandomAgent](crate::ai::simple::RandomAgent),
//!         which simply picks a random move.
//!     * [MinimaxAgent](crate::ai::minimax::MinimaxAgent),
//!         which grows a [DecisionTree](crate::ai::tree::DecisionTree) up to a node budget, trims it,
//!         and picks the move with the best minimax value according to a
//!         [Heuristic](crate::ai::minimax::Heuristic), by default the
//!         [HybridHeuristic](crate::heuristic::reversi::HybridHeuristic).
//! * A bot vs bot game runner to compare playing strength, see [bot_game](crate::util::bot_game).
//! * Simple game statistics (perft, random game length) to test the move generator,
//!     see [game_stats](crate::util::game_stats).
//!
//! Coordinates, transcripts like `"c4 e3 f6"` and board diagrams can be parsed from and printed to text,
//! see [reversi](crate::reversi).

pub mod board;
pub mod error;
pub mod wdl;

pub mod game;
pub mod replay;
pub mod reversi;

pub mod ai;
pub mod heuristic;

pub mod util;
