//! Utilities for collecting game statistics and testing the move generator.
use std::collections::HashMap;

use internal_iterator::InternalIterator;
use rand::Rng;

use crate::replay::MoveLog;
use crate::reversi::{Layout, Move, ReversiBoard};

/// The number of move sequences of length `depth` starting after `log`, including transpositions.
/// Passes are not moves, so they don't count towards the depth.
/// See <https://www.chessprogramming.org/Perft>.
pub fn perft(log: &MoveLog, depth: u32) -> u64 {
    let mut map = HashMap::default();
    perft_recurse(&mut map, log, depth)
}

fn perft_recurse(map: &mut HashMap<(ReversiBoard, u32), u64>, log: &MoveLog, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let board = log.replay_all();
    let player = match board.next_player() {
        None => return 0,
        Some(player) => player,
    };

    // key on the depth too, the same board can show up at different depths on custom layouts
    let key = (board, depth);
    if let Some(&p) = map.get(&key) {
        return p;
    }

    let moves: Vec<Move> = key
        .0
        .available_moves(player)
        .map(|coord| Move::new(coord, player))
        .collect();

    let p = moves
        .into_iter()
        .map(|mv| perft_recurse(map, &log.extended(mv), depth - 1))
        .sum();

    map.insert(key, p);
    p
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games starting from `start` where both players pick uniformly random moves.
pub fn average_game_stats(start: Layout, rng: &mut impl Rng, n: u64) -> GameStats {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut log = MoveLog::with_start(start);
        let mut board = log.replay_all();

        while let Some(player) = board.next_player() {
            let count = board.available_moves(player).count();
            total_moves += count;
            total_positions += 1;

            let index = rng.gen_range(0..count);
            if let Some(coord) = board.available_moves(player).nth(index) {
                log.record(Move::new(coord, player));
                board = log.replay_all();
            }
        }
    }

    GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    }
}
