use crate::core::constants::COLOR_COUNT;
use serde::{Deserialize, Serialize};

/// Outcome categories of the wheel, ordered from the most to the least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Yellow = 0,
    Green = 1,
    Blue = 2,
    Purple = 3,
    Red = 4,
}

impl Color {
    /// Every colour in display order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Red,
    ];

    /// Scraps won per scrap wagered, on top of the returned stake.
    pub fn payout_multiplier(&self) -> i64 {
        match self {
            Color::Yellow => 1,
            Color::Green => 3,
            Color::Blue => 5,
            Color::Purple => 10,
            Color::Red => 20,
        }
    }

    /// Returns the display name for this colour.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
            Color::Red => "Red",
        }
    }

    /// Position in [`Color::ALL`], used to index per-colour arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
