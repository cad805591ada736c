//! Rueel - wheel-of-fortune betting simulator
//!
//! This library exposes the wheel model, bets, strategies and the simulation
//! engine used by the `rueel` binary.

pub mod betting;
pub mod build_info;
pub mod core;
pub mod simulator;
pub mod utils;
pub mod wheel;

pub use betting::{Bet, Strategy, StrategyKind};
pub use crate::core::{Result, SimError};
pub use simulator::{run_batch, run_simulation, SimConfig, SimReport, Simulation, StopReason};
pub use wheel::Color;
