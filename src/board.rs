use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// One of the two players. [Player::One] plays black and always gets the first turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index, useful to index per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The conventional player number, `1` or `2`.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn to_char(self) -> char {
        match self {
            Player::One => 'x',
            Player::Two => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'x' => Some(Player::One),
            'o' => Some(Player::Two),
            _ => None,
        }
    }

    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Outcome {
    /// The outcome of a finished game with the given piece counts: the majority wins, equal counts are a draw.
    pub fn from_counts(count_one: u8, count_two: u8) -> Outcome {
        match count_one.cmp(&count_two) {
            Ordering::Greater => Outcome::WonBy(Player::One),
            Ordering::Less => Outcome::WonBy(Player::Two),
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::WonBy(Player::One) => write!(f, "Black wins"),
            Outcome::WonBy(Player::Two) => write!(f, "White wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
