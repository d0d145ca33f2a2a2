use reversi_ai::ai::minimax::Heuristic;
use reversi_ai::ai::simple::RandomAgent;
use reversi_ai::board::Player;
use reversi_ai::game::GameSession;
use reversi_ai::heuristic::reversi::{evaluate, piece_score, position_score, position_weight, HybridHeuristic};
use reversi_ai::replay::MoveLog;
use reversi_ai::reversi::{Coord, Layout, ReversiBoard};
use reversi_ai::util::tiny::seeded_rng;

use crate::ai::assert_close;
use crate::util::layout_with_rows;

#[test]
fn start_is_even() {
    let board = ReversiBoard::default();
    for player in Player::BOTH {
        assert_close(0.5, evaluate(&board, player));
        assert_close(0.5, piece_score(&board, player));
        assert_close(0.5, position_score(&board, player));
    }
}

#[test]
fn owned_corner() {
    let layout = Layout::standard().with_tile(Coord::from_xy(1, 1), Some(Player::One));
    let board = ReversiBoard::new(&layout);

    // one corner is worth 40 out of 100, and three corners are left for the adjacency part
    assert_close(0.5375, evaluate(&board, Player::One));
    assert_close(0.3375, evaluate(&board, Player::Two));
}

#[test]
fn piece_next_to_free_corner() {
    let layout = Layout::standard().with_tile(Coord::from_xy(2, 2), Some(Player::One));
    let board = ReversiBoard::new(&layout);

    assert_close(0.45, evaluate(&board, Player::One));
    assert_close(0.55, evaluate(&board, Player::Two));
}

#[test]
fn piece_next_to_claimed_corner() {
    // the diagonal neighbour of an owned corner doesn't count anymore
    let layout = Layout::standard()
        .with_tile(Coord::from_xy(1, 1), Some(Player::One))
        .with_tile(Coord::from_xy(2, 2), Some(Player::One));
    let board = ReversiBoard::new(&layout);

    assert_close(0.5375, position_score(&board, Player::One));
}

#[test]
fn phase_weight() {
    assert_close(1.0, position_weight(0));
    assert_close(0.9375, position_weight(30));
    assert_close(0.0, position_weight(60));
    assert!(position_weight(10) > position_weight(40));

    // sparse layouts can last longer than a standard game
    assert_close(0.0, position_weight(61));
    assert_close(0.0, position_weight(90));
}

#[test]
fn material_takes_over_late() {
    let log = MoveLog::from_transcript(Layout::standard(), "c4").unwrap();
    let board = log.replay_all();

    // 4 against 1 pieces
    assert_close(0.5 + 3.0 / 128.0, piece_score(&board, Player::One));

    let weight = position_weight(1);
    let expected = piece_score(&board, Player::One) * (1.0 - weight) + position_score(&board, Player::One) * weight;
    assert_close(expected, evaluate(&board, Player::One));
}

#[test]
fn finished_game() {
    let layout = layout_with_rows(&[(1, "xxx....."), (8, "oo......")]);
    let board = ReversiBoard::new(&layout);
    assert!(board.is_done());

    assert_eq!(1.0, evaluate(&board, Player::One));
    assert_eq!(0.0, evaluate(&board, Player::Two));
    assert_eq!(1.0, HybridHeuristic.value(&board, Player::One));
}

#[test]
fn bounded() {
    let mut session = GameSession::new();
    session.reset(
        Box::new(RandomAgent::new(Player::One, seeded_rng(3))),
        Box::new(RandomAgent::new(Player::Two, seeded_rng(4))),
    ).unwrap();

    let log = session.log();
    for len in 0..=log.len() {
        let board = log.replay(len);
        for player in Player::BOTH {
            let value = evaluate(&board, player);
            assert!((0.0..=1.0).contains(&value), "value {} out of range", value);
        }
    }
}
