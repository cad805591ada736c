//! Running statistics gathered while a simulation spins.

use crate::core::constants::COLOR_COUNT;
use crate::wheel::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    /// Highest scraps held at any point of the run
    pub peak_scraps: i64,
    /// Times each colour came up, indexed by [`Color::index`]
    pub outcome_counts: [u64; COLOR_COUNT],
}

impl Analytics {
    pub fn new(starting_scraps: i64) -> Self {
        Self {
            peak_scraps: starting_scraps,
            outcome_counts: [0; COLOR_COUNT],
        }
    }

    /// Raise the high-water mark if `scraps` exceeds it.
    pub fn observe_scraps(&mut self, scraps: i64) {
        self.peak_scraps = self.peak_scraps.max(scraps);
    }

    pub fn record_outcome(&mut self, color: Color) {
        self.outcome_counts[color.index()] += 1;
    }

    pub fn count(&self, color: Color) -> u64 {
        self.outcome_counts[color.index()]
    }

    pub fn total_draws(&self) -> u64 {
        self.outcome_counts.iter().sum()
    }

    /// Percentage of `iterations` that landed on `color`.
    /// Returns None when no spins happened.
    pub fn share(&self, color: Color, iterations: u64) -> Option<f64> {
        if iterations == 0 {
            None
        } else {
            Some(self.count(color) as f64 / iterations as f64 * 100.0)
        }
    }
}
