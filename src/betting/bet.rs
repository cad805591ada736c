use crate::core::constants::COLOR_COUNT;
use crate::core::error::{Result, SimError};
use crate::wheel::Color;
use serde::{Deserialize, Serialize};

/// Scraps wagered on each colour for a single spin.
///
/// Wagers are expected to be non-negative. A bet built through [`Bet::empty`]
/// always covers every colour; [`Bet::from_wagers`] checks coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bet {
    wagers: [i64; COLOR_COUNT],
}

impl Bet {
    /// A bet with nothing wagered on any colour.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a bet from loose `(colour, wager)` pairs, failing if any colour is missing.
    /// A colour listed twice keeps its last wager.
    pub fn from_wagers<I>(wagers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Color, i64)>,
    {
        let mut bet = Self::empty();
        let mut seen = [false; COLOR_COUNT];

        for (color, amount) in wagers {
            bet.wagers[color.index()] = amount;
            seen[color.index()] = true;
        }

        let missing: Vec<Color> = Color::ALL
            .iter()
            .copied()
            .filter(|c| !seen[c.index()])
            .collect();

        if missing.is_empty() {
            Ok(bet)
        } else {
            Err(SimError::MalformedBet { missing })
        }
    }

    pub fn set(&mut self, color: Color, amount: i64) {
        self.wagers[color.index()] = amount;
    }

    /// Builder-style variant of [`Bet::set`].
    pub fn with(mut self, color: Color, amount: i64) -> Self {
        self.set(color, amount);
        self
    }

    pub fn wager(&self, color: Color) -> i64 {
        self.wagers[color.index()]
    }

    /// Sum of every wager in the bet.
    pub fn total(&self) -> Result<i64> {
        self.wagers
            .iter()
            .try_fold(0i64, |acc, &w| acc.checked_add(w))
            .ok_or(SimError::ScrapsOverflow)
    }

    /// `(colour, wager)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, i64)> + '_ {
        Color::ALL.iter().map(move |&c| (c, self.wager(c)))
    }
}
