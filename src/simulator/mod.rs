//! Wheel simulator: spin a bankroll against a strategy until a stop condition holds.
//!
//! A run moves through one loop per spin:
//! - record the peak scraps seen so far
//! - stop on the iteration cap, then on the scraps goal
//! - otherwise spin, stopping if the bettor has too few scraps to bet
//!
//! Multi-run batches aggregate many seeded runs into a [`BatchReport`].

mod analytics;
mod config;
mod report;
mod runner;
mod spin;

pub use analytics::Analytics;
pub use config::SimConfig;
pub use report::{BatchReport, OutcomeShare, SimReport};
pub use runner::{run_batch, run_simulation, Simulation, StopReason};
pub use spin::{resolve_payout, spin, SpinOutcome};
