//! Text formats for the reversi types.
//!
//! * Coordinates use the `a1`..`h8` notation, the letter is `x` and the digit is `y`.
//! * Layouts are written as diagrams: 8 rows of `x` (player one), `o` (player two) or `.` (empty).
//!     The first row is `y = 1`, within a row the characters go from `x = 1` to `x = 8`.
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use nom::error::Error as NomError;
use nom::Finish;

use crate::board::Player;
use crate::error::Error;
use crate::reversi::{Coord, Layout, Move, ReversiBoard};

mod parse {
    use nom::character::complete::{multispace0, multispace1, one_of};
    use nom::combinator::{all_consuming, map};
    use nom::multi::{count, separated_list0};
    use nom::sequence::{delimited, pair, preceded, terminated};
    use nom::IResult;

    use super::*;

    pub fn coord(input: &str) -> IResult<&str, Coord> {
        map(pair(one_of("abcdefgh"), one_of("12345678")), |(x, y)| {
            Coord::from_xy(x as u8 - b'a' + 1, y as u8 - b'0')
        })(input)
    }

    pub fn transcript(input: &str) -> IResult<&str, Vec<Coord>> {
        all_consuming(delimited(multispace0, separated_list0(multispace1, coord), multispace0))(input)
    }

    fn tile(input: &str) -> IResult<&str, Option<Player>> {
        map(one_of("xo."), Player::from_char)(input)
    }

    fn row(input: &str) -> IResult<&str, Vec<Option<Player>>> {
        preceded(multispace0, count(tile, Coord::SIZE as usize))(input)
    }

    pub fn diagram(input: &str) -> IResult<&str, Vec<Vec<Option<Player>>>> {
        all_consuming(terminated(count(row, Coord::SIZE as usize), multispace0))(input)
    }
}

/// Parse a whitespace separated list of coordinates, for example `"c4 e3 f6"`.
pub fn parse_transcript(s: &str) -> Result<Vec<Coord>, Error> {
    parse::transcript(s)
        .finish()
        .map(|(_, coords)| coords)
        .map_err(|_: NomError<&str>| Error::InvalidNotation(s.to_owned()))
}

impl FromStr for Coord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, coord) = nom::combinator::all_consuming(parse::coord)(s.trim())
            .finish()
            .map_err(|_: NomError<&str>| Error::InvalidNotation(s.to_owned()))?;
        Ok(coord)
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, rows) = parse::diagram(s)
            .finish()
            .map_err(|_: NomError<&str>| Error::InvalidDiagram(s.to_owned()))?;

        let mut layout = Layout::empty();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, tile) in row.into_iter().enumerate() {
                layout = layout.with_tile(Coord::from_xy(x as u8 + 1, y as u8 + 1), tile);
            }
        }
        Ok(layout)
    }
}

impl Layout {
    pub fn to_diagram(&self) -> String {
        diagram(|coord| self.tile(coord)).join("\n")
    }
}

impl ReversiBoard {
    pub fn to_diagram(&self) -> String {
        diagram(|coord| self.tile(coord)).join("\n")
    }
}

fn diagram(tile: impl Fn(Coord) -> Option<Player>) -> Vec<String> {
    (1..=Coord::SIZE)
        .map(|y| {
            (1..=Coord::SIZE)
                .map(|x| tile_to_char(tile(Coord::from_xy(x, y))))
                .collect()
        })
        .collect()
}

fn tile_to_char(tile: Option<Player>) -> char {
    tile.map_or('.', Player::to_char)
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.x() - 1) as char, self.y())
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.x(), self.y())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coord)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}, {})", self.player.to_char(), self.coord)
    }
}

impl Debug for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Layout(\"{}\")", diagram(|coord| self.tile(coord)).join("/"))
    }
}

impl Debug for ReversiBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ReversiBoard(\"{}\", moves_played: {})",
            diagram(|coord| self.tile(coord)).join("/"),
            self.moves_played()
        )
    }
}

impl Display for ReversiBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in diagram(|coord| self.tile(coord)).into_iter().enumerate() {
            write!(f, "{} {}", i + 1, row)?;

            if i == 3 {
                match self.next_player() {
                    Some(player) => write!(f, "    {} to move", player.to_char())?,
                    None => write!(f, "    done")?,
                }
            }
            if i == 4 {
                write!(
                    f,
                    "    x {} - o {}",
                    self.score(Player::One),
                    self.score(Player::Two)
                )?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  abcdefgh")?;
        Ok(())
    }
}
