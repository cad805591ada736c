//! Bets and the strategies that place them.

pub mod bet;
pub mod strategy;

pub use bet::Bet;
pub use strategy::{Strategy, StrategyKind};
