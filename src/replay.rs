//! The move log, and rebuilding boards from it.
//!
//! A [ReversiBoard] is a pure function of a start [Layout] and the moves played on it. Every alternate board
//! state (search lookahead, undo, agent views of the game) is produced by [MoveLog::replay] instead of copying a
//! board, so no two owners ever share or alias a grid.
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::board::Player;
use crate::error::{Error, Result};
use crate::reversi::{parse_transcript, Coord, Layout, Move, ReversiBoard};

/// Append-only history of the moves of a single game.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct MoveLog {
    start: Layout,
    moves: Vec<Move>,
}

impl MoveLog {
    /// An empty log starting from the standard layout.
    pub fn new() -> Self {
        MoveLog::default()
    }

    pub fn with_start(start: Layout) -> Self {
        MoveLog { start, moves: vec![] }
    }

    /// Build a log by playing a transcript like `"c4 e3 f6"` on `start`.
    /// Each move is assigned to the player whose turn it is at that point, passes are implicit.
    pub fn from_transcript(start: Layout, transcript: &str) -> Result<Self> {
        let mut log = MoveLog::with_start(start);
        let mut board = log.replay_all();

        for coord in parse_transcript(transcript)? {
            let player = board.next_player().ok_or(Error::GameFinished)?;
            board.play(coord, player)?;
            log.record(Move::new(coord, player));
        }

        Ok(log)
    }

    pub fn start(&self) -> &Layout {
        &self.start
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Append a move. The caller is responsible for only recording moves that were legal when played.
    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Drop every move after the first `len` ones. Does nothing if the log is already shorter.
    pub fn truncate_to(&mut self, len: usize) {
        self.moves.truncate(len);
    }

    /// A new log that continues this one with `mv`.
    pub fn extended(&self, mv: Move) -> MoveLog {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(mv);
        MoveLog {
            start: self.start,
            moves,
        }
    }

    /// Rebuild the board after the first `prefix_len` moves (or all of them, if there are fewer).
    /// Recorded moves are trusted, so their legality is not checked again.
    pub fn replay(&self, prefix_len: usize) -> ReversiBoard {
        let mut board = ReversiBoard::new(&self.start);
        for mv in self.moves.iter().take(prefix_len) {
            board.play_trusted(mv.coord, mv.player);
        }
        board
    }

    pub fn replay_all(&self) -> ReversiBoard {
        self.replay(self.moves.len())
    }

    /// The moves that were played by `player`.
    pub fn moves_by(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.moves
            .iter()
            .filter(move |mv| mv.player == player)
            .map(|mv| mv.coord)
    }
}

impl Display for MoveLog {
    /// The transcript format accepted by [MoveLog::from_transcript].
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.moves.iter().format(" "))
    }
}
