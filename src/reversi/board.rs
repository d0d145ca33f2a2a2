use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::{Outcome, Player};
use crate::error::{Error, Result};
use crate::reversi::{Coord, DIRECTIONS};

/// A fixed arrangement of pieces that a game starts from.
///
/// This is a plain value, boards themselves are only ever derived from a layout plus a sequence of moves.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Layout {
    pub(super) tiles: [Option<Player>; Coord::AREA],
}

/// The 8x8 Reversi board.
///
/// There is intentionally no `Clone` implementation: other states are obtained by
/// [replaying](crate::replay::MoveLog::replay) a move log instead.
#[derive(Eq, PartialEq, Hash)]
pub struct ReversiBoard {
    tiles: [Option<Player>; Coord::AREA],
    moves_played: u32,
    last_player: Option<Player>,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::standard()
    }
}

impl Layout {
    pub fn empty() -> Layout {
        Layout {
            tiles: [None; Coord::AREA],
        }
    }

    /// The standard opening position: the center 2x2 square split two/two.
    pub fn standard() -> Layout {
        let at = |x, y| Coord::from_xy(x, y).index();

        let mut tiles = [None; Coord::AREA];
        tiles[at(4, 4)] = Some(Player::Two);
        tiles[at(4, 5)] = Some(Player::One);
        tiles[at(5, 4)] = Some(Player::One);
        tiles[at(5, 5)] = Some(Player::Two);
        Layout { tiles }
    }

    pub fn tile(&self, coord: Coord) -> Option<Player> {
        self.tiles[coord.index()]
    }

    pub fn with_tile(mut self, coord: Coord, tile: Option<Player>) -> Layout {
        self.tiles[coord.index()] = tile;
        self
    }
}

impl Default for ReversiBoard {
    fn default() -> Self {
        ReversiBoard::new(&Layout::standard())
    }
}

impl ReversiBoard {
    pub fn new(layout: &Layout) -> Self {
        ReversiBoard {
            tiles: layout.tiles,
            moves_played: 0,
            last_player: None,
        }
    }

    /// Clear the board back to the standard opening position.
    pub fn reset(&mut self) {
        *self = ReversiBoard::new(&Layout::standard());
    }

    pub fn tile(&self, coord: Coord) -> Option<Player> {
        self.tiles[coord.index()]
    }

    pub fn tiles(&self) -> &[Option<Player>; Coord::AREA] {
        &self.tiles
    }

    /// The number of moves applied since the layout, passes are not moves.
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn last_player(&self) -> Option<Player> {
        self.last_player
    }

    pub fn score(&self, player: Player) -> u8 {
        self.tiles.iter().filter(|&&tile| tile == Some(player)).count() as u8
    }

    pub fn empty_count(&self) -> u8 {
        self.tiles.iter().filter(|tile| tile.is_none()).count() as u8
    }

    /// The number of opponent pieces `player` would flip in `direction` by placing at `coord`.
    /// Zero unless the run of opponent pieces is closed off by one of `player`'s own pieces.
    fn flips_in_direction(&self, coord: Coord, player: Player, direction: (i8, i8)) -> usize {
        let mut count = 0;
        for cell in coord.ray(direction) {
            match self.tile(cell) {
                Some(p) if p == player => return count,
                Some(_) => count += 1,
                None => return 0,
            }
        }
        0
    }

    /// Whether `player` may place at `coord`: the cell is empty and at least one opponent run gets sandwiched.
    pub fn is_legal(&self, coord: Coord, player: Player) -> bool {
        self.tile(coord).is_none()
            && DIRECTIONS
                .iter()
                .any(|&direction| self.flips_in_direction(coord, player, direction) > 0)
    }

    /// Place a piece for `player` at `coord` and flip everything it sandwiches.
    /// Fails without touching the board if the move is not legal.
    pub fn play(&mut self, coord: Coord, player: Player) -> Result<()> {
        if !self.is_legal(coord, player) {
            return Err(Error::IllegalMove { coord, player });
        }
        self.play_trusted(coord, player);
        Ok(())
    }

    /// Same as [ReversiBoard::play] but without the legality check, only meant for replaying trusted history.
    pub(crate) fn play_trusted(&mut self, coord: Coord, player: Player) {
        self.tiles[coord.index()] = Some(player);

        for &direction in &DIRECTIONS {
            let count = self.flips_in_direction(coord, player, direction);
            for cell in coord.ray(direction).take(count) {
                self.tiles[cell.index()] = Some(player);
            }
        }

        self.moves_played += 1;
        self.last_player = Some(player);
    }

    pub fn available_moves(&self, player: Player) -> AvailableMovesIterator<'_> {
        AvailableMovesIterator { board: self, player }
    }

    pub fn has_moves(&self, player: Player) -> bool {
        self.available_moves(player).find_map(Some).is_some()
    }

    /// The player that has to act next, `None` once neither player can move.
    ///
    /// The opponent of the last mover normally gets the turn, if they can't move the last mover goes again.
    /// Before the first move player one starts, unless they can't move on a custom layout.
    pub fn next_player(&self) -> Option<Player> {
        let preferred = self.last_player.map_or(Player::One, Player::other);
        [preferred, preferred.other()]
            .into_iter()
            .find(|&player| self.has_moves(player))
    }

    pub fn is_done(&self) -> bool {
        self.next_player().is_none()
    }

    /// The outcome of this game, `None` if it's not done yet.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_done() {
            Some(Outcome::from_counts(self.score(Player::One), self.score(Player::Two)))
        } else {
            None
        }
    }
}

/// The legal placements for a single player, in [Coord::all] order.
#[derive(Debug)]
pub struct AvailableMovesIterator<'a> {
    board: &'a ReversiBoard,
    player: Player,
}

impl InternalIterator for AvailableMovesIterator<'_> {
    type Item = Coord;

    fn try_for_each<R, F: FnMut(Self::Item) -> ControlFlow<R>>(self, mut f: F) -> ControlFlow<R> {
        for coord in Coord::all() {
            if self.board.is_legal(coord, self.player) {
                f(coord)?;
            }
        }
        ControlFlow::Continue(())
    }
}
