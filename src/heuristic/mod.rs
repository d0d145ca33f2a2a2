//! Board evaluation heuristics for the minimax search.
pub mod reversi;
