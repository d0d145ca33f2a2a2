//! The Reversi (Othello) rules on the usual 8x8 board.
pub use board::*;
pub use io::*;
pub use mv::*;

mod board;
mod io;
mod mv;
