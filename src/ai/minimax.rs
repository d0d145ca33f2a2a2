use std::fmt::{Debug, Formatter};

use rand::Rng;
use tracing::debug;

use crate::ai::config::SearchConfig;
use crate::ai::tree::DecisionTree;
use crate::ai::PlayerAgent;
use crate::board::Player;
use crate::error::{Error, Result};
use crate::replay::MoveLog;
use crate::reversi::{Coord, Move, ReversiBoard};

pub trait Heuristic: Debug {
    /// Return the heuristic value of `board` from the POV of `player`, between `0` (bad) and `1` (good).
    fn value(&self, board: &ReversiBoard, player: Player) -> f32;
}

#[derive(Debug, Copy, Clone)]
pub struct SearchResult {
    /// The move that was picked, usually the best one.
    pub best_move: Move,
    /// The minimax value of the root.
    pub value: f32,
    /// The minimax value of the picked move.
    pub move_value: f32,
    /// The depth the tree was deepened to.
    pub depth: u32,
    /// The number of nodes left in the tree after the final trim.
    pub nodes: usize,
}

/// Pick a move for `player` in the position after `log`, using a [DecisionTree] scored by `heuristic`.
///
/// Fails if `player` has no legal move or if it's not `player`'s turn.
pub fn search<H: Heuristic>(
    log: &MoveLog,
    player: Player,
    heuristic: &H,
    config: &SearchConfig,
    rng: &mut impl Rng,
) -> Result<SearchResult> {
    config.assert_valid();

    let board = log.replay_all();
    if !board.has_moves(player) {
        return Err(Error::NoLegalMoveForSearch { player });
    }
    if board.next_player() != Some(player) {
        return Err(Error::OutOfTurn { player });
    }

    let mut tree = DecisionTree::new(log.clone(), player, heuristic);
    let depth = tree.deepen(config);

    let root = tree.root();
    let value = tree.score(root);
    let (best_move, move_value) = tree
        .select(config, rng)
        .ok_or(Error::NoLegalMoveForSearch { player })?;
    let nodes = tree.total_nodes();

    debug!(%best_move, rating = value, move_value, depth, nodes, "search picked a move");

    Ok(SearchResult {
        best_move,
        value,
        move_value,
        depth,
        nodes,
    })
}

/// Agent that picks its moves with [search].
pub struct MinimaxAgent<H: Heuristic, R: Rng> {
    player: Player,
    heuristic: H,
    config: SearchConfig,
    rng: R,
    log: MoveLog,
    board: ReversiBoard,
    last_result: Option<SearchResult>,
}

impl<H: Heuristic, R: Rng> Debug for MinimaxAgent<H, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MinimaxAgent {{ player: {}, heuristic: {:?}, config: {:?} }}",
            self.player, self.heuristic, self.config
        )
    }
}

impl<H: Heuristic, R: Rng> MinimaxAgent<H, R> {
    pub fn new(player: Player, heuristic: H, config: SearchConfig, rng: R) -> Self {
        config.assert_valid();
        MinimaxAgent {
            player,
            heuristic,
            config,
            rng,
            log: MoveLog::new(),
            board: ReversiBoard::default(),
            last_result: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// This agent's private copy of the game, replayed from the last notified move log.
    pub fn board(&self) -> &ReversiBoard {
        &self.board
    }

    /// The result of the most recent search.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl<H: Heuristic, R: Rng> PlayerAgent for MinimaxAgent<H, R> {
    fn player(&self) -> Player {
        self.player
    }

    fn notify_turn(&mut self, log: &MoveLog) {
        self.board = log.replay_all();
        self.log = log.clone();
    }

    fn choose_move(&mut self) -> Result<Option<Coord>> {
        if !self.board.has_moves(self.player) {
            return Err(Error::NoLegalMoveForSearch { player: self.player });
        }

        let result = search(&self.log, self.player, &self.heuristic, &self.config, &mut self.rng)?;
        self.last_result = Some(result);
        Ok(Some(result.best_move.coord))
    }
}
