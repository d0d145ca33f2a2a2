use crate::board::Player;
use crate::error::{Error, Result};

/// A cell on the 8x8 board, addressed with 1-based `x` and `y`.
///
/// Cells are stored x-major, so [Coord::all] visits `(1, 1), (1, 2), ..., (1, 8), (2, 1), ...`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    index: u8,
}

/// A placement by `player`, immutable once recorded in a [MoveLog](crate::replay::MoveLog).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub coord: Coord,
    pub player: Player,
}

pub type CoordAllIter = std::iter::Map<std::ops::Range<u8>, fn(u8) -> Coord>;

/// The eight ray directions as `(dx, dy)`.
pub const DIRECTIONS: [(i8, i8); 8] = [(1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)];

impl Coord {
    pub const SIZE: u8 = 8;
    pub const AREA: usize = (Coord::SIZE * Coord::SIZE) as usize;

    /// Build a coordinate from 1-based `x` and `y`, rejecting anything outside of the board.
    pub fn new(x: u8, y: u8) -> Result<Coord> {
        if (1..=Self::SIZE).contains(&x) && (1..=Self::SIZE).contains(&y) {
            Ok(Coord {
                index: (x - 1) * Self::SIZE + (y - 1),
            })
        } else {
            Err(Error::InvalidCoordinate { x, y })
        }
    }

    /// Same as [Coord::new], but panics on coordinates outside of the board.
    pub fn from_xy(x: u8, y: u8) -> Coord {
        match Coord::new(x, y) {
            Ok(coord) => coord,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn from_index(index: u8) -> Coord {
        assert!((index as usize) < Self::AREA, "index {} out of range", index);
        Coord { index }
    }

    pub fn all() -> CoordAllIter {
        (0..Self::AREA as u8).map(Coord::from_index)
    }

    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn x(self) -> u8 {
        self.index / Self::SIZE + 1
    }

    pub fn y(self) -> u8 {
        self.index % Self::SIZE + 1
    }

    /// The neighbouring cell in direction `(dx, dy)`, `None` when that walks off the board.
    pub fn step(self, (dx, dy): (i8, i8)) -> Option<Coord> {
        let x = self.x() as i8 + dx;
        let y = self.y() as i8 + dy;
        if x < 1 || y < 1 {
            return None;
        }
        Coord::new(x as u8, y as u8).ok()
    }

    /// All cells reached by walking from `self` in `direction`, excluding `self`.
    pub fn ray(self, direction: (i8, i8)) -> impl Iterator<Item = Coord> {
        std::iter::successors(self.step(direction), move |&c| c.step(direction))
    }
}

impl Move {
    pub fn new(coord: Coord, player: Player) -> Move {
        Move { coord, player }
    }

    pub fn x(self) -> u8 {
        self.coord.x()
    }

    pub fn y(self) -> u8 {
        self.coord.y()
    }
}
