//! Simulation configuration.

use crate::betting::StrategyKind;
use crate::core::constants::{
    BENCHMARK_MAX_ITERATIONS, BENCHMARK_STARTING_SCRAPS, DEFAULT_MAX_ITERATIONS,
    DEFAULT_STARTING_SCRAPS, REFERENCE_MAX_ITERATIONS, REFERENCE_SCRAPS_GOAL,
};
use serde::{Deserialize, Serialize};

/// Configuration for a simulation run. Fixed once the simulation is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Scraps held before the first spin
    pub starting_scraps: i64,

    /// Built-in strategy used by [`Simulation::new`](super::Simulation::new)
    pub strategy: StrategyKind,

    /// Stop once scraps reach this amount (0 or less = no goal)
    pub scraps_goal: i64,

    /// Stop after this many spins (0 = no cap)
    pub max_iterations: u64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_scraps: DEFAULT_STARTING_SCRAPS,
            strategy: StrategyKind::AllIn,
            scraps_goal: 0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl SimConfig {
    /// The run performed by the `rueel` binary when given no options.
    pub fn reference() -> Self {
        Self {
            strategy: StrategyKind::HalfOnYellow,
            scraps_goal: REFERENCE_SCRAPS_GOAL,
            max_iterations: REFERENCE_MAX_ITERATIONS,
            ..Default::default()
        }
    }

    /// A larger bankroll over a million spins, used for benchmarking.
    pub fn benchmark() -> Self {
        Self {
            starting_scraps: BENCHMARK_STARTING_SCRAPS,
            strategy: StrategyKind::HalfOnYellow,
            scraps_goal: REFERENCE_SCRAPS_GOAL,
            max_iterations: BENCHMARK_MAX_ITERATIONS,
            ..Default::default()
        }
    }

    pub fn has_goal(&self) -> bool {
        self.scraps_goal > 0
    }

    pub fn has_iteration_cap(&self) -> bool {
        self.max_iterations > 0
    }
}
