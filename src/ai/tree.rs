//! The decision tree behind [MinimaxAgent](crate::ai::minimax::MinimaxAgent).
//!
//! Nodes live in an arena and refer to each other by [NodeId]. Every node owns the move log that leads to it and
//! the board replayed from that log. Children are generated lazily, scores are minimax values that get
//! memoized until the subtree below a node changes.
//!
//! To keep the tree small it gets trimmed: only children close to the best one (from the POV of the player to
//! act at that node) survive. This is a heuristic, unlike alpha-beta pruning it can throw away the best line.
use std::cmp::Reverse;

use decorum::N32;
use internal_iterator::InternalIterator;
use rand::Rng;
use tracing::debug;

use crate::ai::config::SearchConfig;
use crate::ai::minimax::Heuristic;
use crate::board::Player;
use crate::replay::MoveLog;
use crate::reversi::{Move, ReversiBoard};

/// Index of a node in a [DecisionTree].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    log: MoveLog,
    board: ReversiBoard,
    to_act: Option<Player>,
    parent: Option<NodeId>,
    /// `None` until expanded, expanded terminal nodes have no children.
    children: Option<Vec<NodeId>>,
    score: Option<f32>,
}

impl Node {
    fn new(log: MoveLog, parent: Option<NodeId>) -> Self {
        let board = log.replay_all();
        let to_act = board.next_player();
        Node {
            log,
            board,
            to_act,
            parent,
            children: None,
            score: None,
        }
    }
}

#[derive(Debug)]
pub struct DecisionTree<'h, H: Heuristic> {
    searcher: Player,
    heuristic: &'h H,
    nodes: Vec<Node>,
}

impl<'h, H: Heuristic> DecisionTree<'h, H> {
    /// A tree with only a root for the position after `log`, scored from the POV of `searcher`.
    pub fn new(log: MoveLog, searcher: Player, heuristic: &'h H) -> Self {
        DecisionTree {
            searcher,
            heuristic,
            nodes: vec![Node::new(log, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn searcher(&self) -> Player {
        self.searcher
    }

    pub fn board(&self, id: NodeId) -> &ReversiBoard {
        &self.nodes[id.0].board
    }

    pub fn log(&self, id: NodeId) -> &MoveLog {
        &self.nodes[id.0].log
    }

    /// The move that leads from the parent to this node, `None` for the root.
    pub fn last_move(&self, id: NodeId) -> Option<Move> {
        self.nodes[id.0].parent.and(self.nodes[id.0].log.last())
    }

    /// The player to act at this node, `None` if the game is over there.
    pub fn to_act(&self, id: NodeId) -> Option<Player> {
        self.nodes[id.0].to_act
    }

    /// The children that are still part of the tree, empty if the node has not been expanded.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id.0].children.as_deref().unwrap_or(&[])
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.nodes[id.0].children.is_some()
    }

    /// Generate one child per legal move of the player to act. Does nothing if the node was already expanded.
    pub fn expand(&mut self, id: NodeId) {
        if self.is_expanded(id) {
            return;
        }

        let node = &self.nodes[id.0];
        let children: Vec<Node> = match node.to_act {
            None => vec![],
            Some(player) => node
                .board
                .available_moves(player)
                .map(|coord| Node::new(node.log.extended(Move::new(coord, player)), Some(id)))
                .collect(),
        };

        let first = self.nodes.len();
        self.nodes.extend(children);
        let ids: Vec<NodeId> = (first..self.nodes.len()).map(NodeId).collect();

        self.nodes[id.0].children = Some(ids);
        self.invalidate(id);
    }

    /// Expand `levels` plies deep below `id`, reusing whatever was expanded before.
    pub fn expand_to_depth(&mut self, id: NodeId, levels: u32) {
        if levels == 0 {
            return;
        }
        self.expand(id);
        for child in self.children(id).to_vec() {
            self.expand_to_depth(child, levels - 1);
        }
    }

    /// Forget the memoized scores of `id` and all of its ancestors.
    fn invalidate(&mut self, id: NodeId) {
        let mut curr = Some(id);
        while let Some(id) = curr {
            let node = &mut self.nodes[id.0];
            node.score = None;
            curr = node.parent;
        }
    }

    /// The minimax score of a node from the POV of the searcher.
    ///
    /// Leaves are scored by the heuristic, otherwise the searcher picks the maximum child score and the opponent
    /// the minimum one.
    pub fn score(&mut self, id: NodeId) -> f32 {
        if let Some(score) = self.nodes[id.0].score {
            return score;
        }

        let children = self.children(id).to_vec();
        let score = if children.is_empty() {
            self.heuristic.value(&self.nodes[id.0].board, self.searcher)
        } else {
            let maximizing = self.nodes[id.0].to_act == Some(self.searcher);
            let scores = children.into_iter().map(|child| self.score(child));
            if maximizing {
                scores.fold(f32::NEG_INFINITY, f32::max)
            } else {
                scores.fold(f32::INFINITY, f32::min)
            }
        };

        self.nodes[id.0].score = Some(score);
        score
    }

    /// The children of `id` with their scores, best for the searcher first.
    /// Children with equal scores keep their move generation order.
    pub fn ranked_children(&mut self, id: NodeId) -> Vec<(NodeId, f32)> {
        let mut ranked: Vec<(NodeId, f32)> = self
            .children(id)
            .to_vec()
            .into_iter()
            .map(|child| (child, self.score(child)))
            .collect();
        ranked.sort_by_key(|&(_, score)| Reverse(N32::from_inner(score)));
        ranked
    }

    /// Trim the subtree below `id`: drop children that are more than `trim_window` away from the choice the
    /// player to act would make, then keep at most `trim_width` of the remaining ones.
    pub fn trim(&mut self, id: NodeId, config: &SearchConfig) {
        let mut ranked = self.ranked_children(id);
        if ranked.is_empty() {
            return;
        }

        // the searcher cuts its bad moves, the opponent cuts its bad moves, which are the good ones for the searcher
        let maximizing = self.nodes[id.0].to_act == Some(self.searcher);
        let extreme = if maximizing {
            ranked[0].1
        } else {
            ranked[ranked.len() - 1].1
        };

        ranked.retain(|&(_, score)| (extreme - score).abs() <= config.trim_window);

        if ranked.len() > config.trim_width {
            if maximizing {
                ranked.truncate(config.trim_width);
            } else {
                let excess = ranked.len() - config.trim_width;
                ranked.drain(..excess);
            }
        }

        let kept: Vec<NodeId> = ranked.into_iter().map(|(child, _)| child).collect();
        self.nodes[id.0].children = Some(kept.clone());

        for child in kept {
            self.trim(child, config);
        }
    }

    /// Iterative deepening: expand one ply deeper at a time until the node budget or the depth limit is reached,
    /// trimming after every expansion past `trim_after_depth`. Returns the depth that was reached.
    pub fn deepen(&mut self, config: &SearchConfig) -> u32 {
        let root = self.root();
        let mut depth = 0;

        while self.total_nodes() < config.node_budget && depth < config.max_depth {
            depth += 1;
            self.expand_to_depth(root, depth);
            if depth > config.trim_after_depth {
                self.trim(root, config);
            }
            debug!(depth, nodes = self.total_nodes(), "deepened decision tree");
        }

        depth
    }

    /// Pick the move with the best score at the root, or the second best one with probability
    /// `second_best_probability`. Returns the move and its score, `None` if there are no moves at the root.
    pub fn select(&mut self, config: &SearchConfig, rng: &mut impl Rng) -> Option<(Move, f32)> {
        let root = self.root();
        self.expand(root);

        let ranked = self.ranked_children(root);
        let mut pick = ranked.first()?;
        if ranked.len() > 1 && rng.gen_bool(config.second_best_probability) {
            pick = &ranked[1];
        }

        let mv = self.last_move(pick.0)?;
        Some((mv, pick.1))
    }

    /// The nodes that are still reachable from the root, in depth-first order.
    fn reachable(&self) -> Vec<NodeId> {
        let mut result = vec![];
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            result.push(id);
            stack.extend_from_slice(self.children(id));
        }
        result
    }

    /// The number of nodes that are still reachable from the root, including the root itself.
    pub fn total_nodes(&self) -> usize {
        self.reachable().len()
    }

    /// The largest number of children any reachable node has.
    pub fn max_branching(&self) -> usize {
        self.reachable()
            .into_iter()
            .map(|id| self.children(id).len())
            .max()
            .unwrap_or(0)
    }
}
