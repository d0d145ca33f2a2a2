use std::ops::{Add, AddAssign, Div};

use crate::board::{Outcome, Player};

/// The outcome of a game from the POV of a certain player. Usually obtained using [Outcome::pov].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OutcomeWDL {
    Win,
    Draw,
    Loss,
}

/// A collection of [win, draw, loss] values.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WDL<V> {
    pub win: V,
    pub draw: V,
    pub loss: V,
}

impl Outcome {
    /// View this outcome from the POV of `pov`.
    pub fn pov(self, pov: Player) -> OutcomeWDL {
        match self {
            Outcome::WonBy(player) if player == pov => OutcomeWDL::Win,
            Outcome::WonBy(_) => OutcomeWDL::Loss,
            Outcome::Draw => OutcomeWDL::Draw,
        }
    }
}

impl OutcomeWDL {
    /// Convert this to a WDL with a one at the correct place and zero otherwise.
    pub fn to_wdl<V: num_traits::One + num_traits::Zero>(self) -> WDL<V> {
        match self {
            OutcomeWDL::Win => WDL::new(V::one(), V::zero(), V::zero()),
            OutcomeWDL::Draw => WDL::new(V::zero(), V::one(), V::zero()),
            OutcomeWDL::Loss => WDL::new(V::zero(), V::zero(), V::one()),
        }
    }
}

impl<V> WDL<V> {
    pub fn new(win: V, draw: V, loss: V) -> Self {
        WDL { win, draw, loss }
    }
}

impl<V: Copy + Add<V, Output = V>> WDL<V> {
    pub fn sum(self) -> V {
        self.win + self.draw + self.loss
    }
}

impl WDL<u32> {
    /// The fraction of games that ended in each result.
    pub fn to_fractions(self) -> WDL<f32> {
        let total = self.sum().max(1) as f32;
        WDL::new(self.win as f32, self.draw as f32, self.loss as f32) / total
    }
}

impl<V: Copy + Add<V, Output = V>> Add<WDL<V>> for WDL<V> {
    type Output = WDL<V>;

    fn add(self, rhs: WDL<V>) -> Self::Output {
        WDL {
            win: self.win + rhs.win,
            draw: self.draw + rhs.draw,
            loss: self.loss + rhs.loss,
        }
    }
}

impl<V: Copy + Add<V, Output = V>> AddAssign<WDL<V>> for WDL<V> {
    fn add_assign(&mut self, rhs: WDL<V>) {
        *self = *self + rhs;
    }
}

impl<V: Copy + Div<V, Output = V>> Div<V> for WDL<V> {
    type Output = WDL<V>;

    fn div(self, rhs: V) -> Self::Output {
        WDL {
            win: self.win / rhs,
            draw: self.draw / rhs,
            loss: self.loss / rhs,
        }
    }
}
