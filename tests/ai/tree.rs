use reversi_ai::ai::config::SearchConfig;
use reversi_ai::ai::tree::DecisionTree;
use reversi_ai::board::Player;
use reversi_ai::heuristic::reversi::{evaluate, HybridHeuristic};
use reversi_ai::replay::MoveLog;
use reversi_ai::reversi::Coord;
use reversi_ai::util::tiny::consistent_rng;

use crate::util::layout_with_rows;

#[test]
fn lazy_expansion() {
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);
    let root = tree.root();

    assert!(!tree.is_expanded(root));
    assert_eq!(1, tree.total_nodes());
    assert_eq!(None, tree.last_move(root));

    tree.expand(root);
    assert_eq!(5, tree.total_nodes());

    let moves: Vec<Coord> = tree
        .children(root)
        .iter()
        .map(|&child| tree.last_move(child).unwrap().coord)
        .collect();
    assert_eq!(
        vec![
            Coord::from_xy(3, 4),
            Coord::from_xy(4, 3),
            Coord::from_xy(5, 6),
            Coord::from_xy(6, 5)
        ],
        moves
    );

    // expanding again doesn't add anything
    tree.expand(root);
    assert_eq!(5, tree.total_nodes());

    tree.expand_to_depth(root, 3);
    assert_eq!(1 + 4 + 12 + 56, tree.total_nodes());
}

#[test]
fn child_state_is_replayed() {
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);
    let root = tree.root();
    tree.expand(root);

    for &child in tree.children(root) {
        let log = tree.log(child);
        assert_eq!(1, log.len());
        assert_eq!(&log.replay_all(), tree.board(child));
        assert_eq!(Some(Player::Two), tree.to_act(child));
    }
}

#[test]
fn leaf_score_is_heuristic() {
    let mut tree = DecisionTree::new(MoveLog::new(), Player::Two, &HybridHeuristic);
    let root = tree.root();
    assert_eq!(evaluate(tree.board(root), Player::Two), tree.score(root));
}

#[test]
fn minimax_scores() {
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);
    let root = tree.root();
    tree.expand_to_depth(root, 2);

    let children = tree.children(root).to_vec();
    let mut child_scores = vec![];
    for &child in &children {
        let grandchildren = tree.children(child).to_vec();
        let min = grandchildren
            .iter()
            .map(|&g| evaluate(tree.board(g), Player::One))
            .fold(f32::INFINITY, f32::min);

        // player two acts at the children, so they minimize
        assert_eq!(min, tree.score(child));
        child_scores.push(min);
    }

    let max = child_scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(max, tree.score(root));
}

#[test]
fn scores_update_after_expansion() {
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);
    let root = tree.root();
    tree.expand(root);
    tree.score(root);

    let child = tree.children(root)[0];
    tree.expand(child);

    // the memoized scores of the child and the root must be recomputed from the new leaves
    let child_deep = tree.score(child);
    let expected_child = tree
        .children(child)
        .to_vec()
        .into_iter()
        .map(|g| evaluate(tree.board(g), Player::One))
        .fold(f32::INFINITY, f32::min);
    assert_eq!(expected_child, child_deep);

    let root_deep = tree.score(root);
    let other_children: Vec<f32> = tree.children(root)[1..]
        .to_vec()
        .into_iter()
        .map(|c| evaluate(tree.board(c), Player::One))
        .collect();
    let expected_root = other_children.into_iter().fold(child_deep, f32::max);
    assert_eq!(expected_root, root_deep);
}

#[test]
fn ranked_children_sorted() {
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);
    let root = tree.root();
    tree.expand_to_depth(root, 2);

    let ranked = tree.ranked_children(root);
    assert_eq!(4, ranked.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn trim_limits_width() {
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);
    let root = tree.root();
    tree.expand_to_depth(root, 3);

    let config = SearchConfig::default();
    let best_before = tree.score(root);
    tree.trim(root, &config);

    assert!(tree.max_branching() <= config.trim_width);
    assert!(tree.total_nodes() < 1 + 4 + 12 + 56);
    // the best line for the searcher survives
    assert_eq!(best_before, tree.score(root));
}

#[test]
fn trim_window_drops_bad_moves() {
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);
    let root = tree.root();
    tree.expand(root);

    // a zero window only keeps the children tied with the best one
    let config = SearchConfig::default().with_trim_window(0.0).with_trim_width(4);
    let best = tree.score(root);
    tree.trim(root, &config);

    assert!(!tree.children(root).is_empty());
    for child in tree.children(root).to_vec() {
        assert_eq!(best, tree.score(child));
    }
}

#[test]
fn deepen_with_default_config() {
    let config = SearchConfig::default();
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);
    let depth = tree.deepen(&config);

    assert!(depth >= 4 && depth <= config.max_depth, "depth {}", depth);
    // the last deepening step was past the trim depth, so every node is trimmed
    assert!(tree.max_branching() <= config.trim_width);
}

#[test]
fn deepen_stops_at_max_depth() {
    let config = SearchConfig::default().with_max_depth(2);
    let mut tree = DecisionTree::new(MoveLog::new(), Player::One, &HybridHeuristic);

    assert_eq!(2, tree.deepen(&config));
    assert_eq!(1 + 4 + 12, tree.total_nodes());
}

#[test]
fn finished_root() {
    let layout = layout_with_rows(&[(1, "xxx....."), (8, "oo......")]);
    let mut tree = DecisionTree::new(MoveLog::with_start(layout), Player::One, &HybridHeuristic);
    let root = tree.root();

    assert_eq!(None, tree.to_act(root));
    tree.expand(root);
    assert!(tree.is_expanded(root));
    assert!(tree.children(root).is_empty());
    assert_eq!(1.0, tree.score(root));

    let config = SearchConfig::default();
    assert_eq!(None, tree.select(&config, &mut consistent_rng()));
}
