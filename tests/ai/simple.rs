use internal_iterator::InternalIterator;

use reversi_ai::ai::config::SearchConfig;
use reversi_ai::ai::minimax::MinimaxAgent;
use reversi_ai::ai::simple::{HumanAgent, RandomAgent};
use reversi_ai::ai::PlayerAgent;
use reversi_ai::board::{Outcome, Player};
use reversi_ai::error::Error;
use reversi_ai::heuristic::reversi::HybridHeuristic;
use reversi_ai::replay::MoveLog;
use reversi_ai::reversi::{Coord, Layout};
use reversi_ai::util::bot_game;
use reversi_ai::util::tiny::{consistent_rng, seeded_rng};

use crate::ai::agent_move;
use crate::util::{layout_with_rows, test_sampler_uniform};

#[test]
fn human_never_moves() {
    let mut agent = HumanAgent::new(Player::One);
    assert_eq!(None, agent_move(&mut agent, &MoveLog::new()));
    assert_eq!(None, agent_move(&mut agent, &MoveLog::new()));
    agent.notify_game_over(Outcome::Draw);
}

#[test]
fn random_uniform() {
    let log = MoveLog::from_transcript(Layout::standard(), "f5 f6 e6 f4").unwrap();
    let expected: Vec<Coord> = log.replay_all().available_moves(Player::One).collect();

    let mut agent = RandomAgent::new(Player::One, consistent_rng());
    agent.notify_turn(&log);
    test_sampler_uniform(&expected, || agent.choose_move().unwrap());
}

#[test]
fn random_without_moves() {
    let log = MoveLog::with_start(layout_with_rows(&[(1, "ox......")]));

    let mut agent = RandomAgent::new(Player::One, consistent_rng());
    agent.notify_turn(&log);
    assert_eq!(
        Err(Error::NoLegalMoveForSearch { player: Player::One }),
        agent.choose_move()
    );
}

#[test]
fn random_vs_random() {
    let result = bot_game::run(
        Layout::standard(),
        |player| RandomAgent::new(player, seeded_rng(1)),
        |player| RandomAgent::new(player, seeded_rng(2)),
        5,
        true,
        |_, _| {},
    );

    assert_eq!(10, result.game_count);
    assert_eq!(10, result.replays.len());
    assert_eq!(10, result.wdl_l.sum());

    for (i, replay) in result.replays.iter().enumerate() {
        let expected_l = if i % 2 == 0 { Player::One } else { Player::Two };
        assert_eq!(expected_l, replay.player_l);

        let board = replay.log.replay_all();
        assert!(board.is_done());
        assert_eq!(Some(replay.outcome), board.outcome());
    }
}

#[test]
fn minimax_vs_random() {
    let config = SearchConfig::default().with_node_budget(60);

    let result = bot_game::run(
        Layout::standard(),
        |player| MinimaxAgent::new(player, HybridHeuristic, config, seeded_rng(1)),
        |player| RandomAgent::new(player, seeded_rng(2)),
        1,
        true,
        |wdl, replay| println!("{:?} after {}", wdl, replay.log),
    );

    assert_eq!(2, result.game_count);
    println!("{:?}", result);
}
