//! Resolving a single spin of the wheel against a strategy's bet.

use super::analytics::Analytics;
use crate::betting::{Bet, Strategy};
use crate::core::constants::MIN_SCRAPS_TO_SPIN;
use crate::core::error::{Result, SimError};
use crate::wheel::{spin_wheel, Color};
use rand::Rng;

/// What happened when the bettor stepped up to the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    /// Too few scraps to place a real bet; the run cannot continue.
    Insufficient,
    Resolved {
        winner: Color,
        /// Total scraps put on the table
        wagered: i64,
        /// Net change in the bettor's scraps
        delta: i64,
    },
}

impl SpinOutcome {
    pub fn delta(&self) -> i64 {
        match self {
            SpinOutcome::Insufficient => 0,
            SpinOutcome::Resolved { delta, .. } => *delta,
        }
    }

    pub fn should_stop(&self) -> bool {
        matches!(self, SpinOutcome::Insufficient)
    }
}

/// Net scraps change when `winner` comes up against `bet`.
///
/// The wager on the winner is returned with winnings at the colour's multiplier.
/// Every other wager is lost; unwagered scraps are untouched.
pub fn resolve_payout(bet: &Bet, winner: Color) -> Result<i64> {
    let on_winner = bet.wager(winner);
    let reward = on_winner
        .checked_mul(winner.payout_multiplier())
        .and_then(|winnings| winnings.checked_add(on_winner))
        .ok_or(SimError::ScrapsOverflow)?;
    let lost = bet
        .total()?
        .checked_sub(on_winner)
        .ok_or(SimError::ScrapsOverflow)?;

    reward.checked_sub(lost).ok_or(SimError::ScrapsOverflow)
}

/// Spin once with the bet `strategy` places for `scraps`, recording the winning colour.
pub fn spin<S, R>(
    scraps: i64,
    strategy: &S,
    rng: &mut R,
    analytics: &mut Analytics,
) -> Result<SpinOutcome>
where
    S: Strategy + ?Sized,
    R: Rng,
{
    if scraps < MIN_SCRAPS_TO_SPIN {
        return Ok(SpinOutcome::Insufficient);
    }

    let bet = strategy.place_bet(scraps)?;
    let winner = spin_wheel(rng);
    analytics.record_outcome(winner);

    let wagered = bet.total()?;
    let delta = resolve_payout(&bet, winner)?;

    tracing::trace!(
        scraps,
        wagered,
        winner = winner.name(),
        delta,
        "spin resolved"
    );

    Ok(SpinOutcome::Resolved {
        winner,
        wagered,
        delta,
    })
}
