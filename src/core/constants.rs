// Wheel layout constants
pub const WHEEL_SLOTS: usize = 25;
pub const COLOR_COUNT: usize = 5;

// Below this many scraps a spin is not a real bet and the run halts
pub const MIN_SCRAPS_TO_SPIN: i64 = 2;

// Defaults for a freshly configured simulation
pub const DEFAULT_STARTING_SCRAPS: i64 = 1000;
pub const DEFAULT_MAX_ITERATIONS: u64 = 10;

// Reference entry-point run
pub const REFERENCE_SCRAPS_GOAL: i64 = 1_000_000_000_000_000_000;
pub const REFERENCE_MAX_ITERATIONS: u64 = 10_000_000;

// Reference benchmark run
pub const BENCHMARK_STARTING_SCRAPS: i64 = 100_000;
pub const BENCHMARK_MAX_ITERATIONS: u64 = 1_000_000;
