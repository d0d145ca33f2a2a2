use crate::ai::minimax::Heuristic;
use crate::board::Player;
use crate::reversi::{Coord, ReversiBoard};

/// The four corners, each paired with its diagonal neighbour (the "X-square").
const CORNERS: [((u8, u8), (u8, u8)); 4] = [
    ((1, 1), (2, 2)),
    ((8, 1), (7, 2)),
    ((1, 8), (2, 7)),
    ((8, 8), (7, 7)),
];

/// The number of moves in a game that fills the whole board.
const FULL_GAME_MOVES: f32 = 60.0;

/// Blends material and corner control, weighted by how far the game has progressed.
///
/// Early on the position dominates: owning corners is good and sitting next to a corner nobody has claimed yet
/// is bad, since it hands that corner to the opponent. Towards the end only the piece count matters.
/// Finished games score `1` for a win and `0` otherwise, so a draw counts as a loss.
#[derive(Debug, Default, Copy, Clone)]
pub struct HybridHeuristic;

impl Heuristic for HybridHeuristic {
    fn value(&self, board: &ReversiBoard, player: Player) -> f32 {
        evaluate(board, player)
    }
}

/// Map `value` from `[min, max]` to `[0, 1]`.
fn normalize(value: f32, max: f32, min: f32) -> f32 {
    (value - min) / (max - min)
}

/// Score `board` from the POV of `player`, in `[0, 1]`.
pub fn evaluate(board: &ReversiBoard, player: Player) -> f32 {
    if board.is_done() {
        let own = board.score(player);
        let opponent = board.score(player.other());
        return if own > opponent { 1.0 } else { 0.0 };
    }

    let weight = position_weight(board.moves_played());
    piece_score(board, player) * (1.0 - weight) + position_score(board, player) * weight
}

/// How much the positional part counts after `moves_played` moves, from `1` at the start to `0` for a full board.
///
/// Sparse custom layouts can take more moves than a standard game, the weight stays at `0` past that point.
pub fn position_weight(moves_played: u32) -> f32 {
    let progress = (moves_played as f32 / FULL_GAME_MOVES).min(1.0);
    1.0 - progress.powi(4)
}

/// The piece difference, normalized from `[-64, 64]`.
pub fn piece_score(board: &ReversiBoard, player: Player) -> f32 {
    let difference: i32 = board
        .tiles()
        .iter()
        .flatten()
        .map(|&owner| owner.sign::<i32>(player))
        .sum();
    normalize(difference as f32, Coord::AREA as f32, -(Coord::AREA as f32))
}

/// Corner ownership and the danger of pieces next to unclaimed corners, in `[0, 1]`.
pub fn position_score(board: &ReversiBoard, player: Player) -> f32 {
    let mut own_corners = 0;
    let mut opponent_corners = 0;
    let mut adjacent_score = 0;

    for &((cx, cy), (ax, ay)) in &CORNERS {
        match board.tile(Coord::from_xy(cx, cy)) {
            Some(owner) if owner == player => own_corners += 1,
            Some(_) => opponent_corners += 1,
            None => match board.tile(Coord::from_xy(ax, ay)) {
                Some(owner) if owner == player => adjacent_score -= 10,
                Some(_) => adjacent_score += 10,
                None => {}
            },
        }
    }

    let corner_score = corner_value(own_corners) - corner_value(opponent_corners);
    let free_corners = (4 - own_corners - opponent_corners) as f32;

    normalize(corner_score as f32, 100.0, -100.0) * 0.5
        + normalize(adjacent_score as f32, 50.0, -50.0) * (free_corners / 4.0) * 0.5
}

/// The value of holding `count` corners: 40, 70, 90 and 100 for one to four of them.
fn corner_value(count: i32) -> i32 {
    5 * (9 * count - count * count)
}
