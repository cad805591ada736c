//! Betting strategies: how a bettor splits their scraps across colours.

use super::bet::Bet;
use crate::core::error::{Result, SimError};
use crate::wheel::Color;
use serde::{Deserialize, Serialize};

/// Decides the bet to place given the scraps currently held.
///
/// The engine does not check that the bet fits within `scraps`; a strategy
/// that over-wagers can push the bettor negative.
pub trait Strategy {
    fn name(&self) -> &str;

    fn place_bet(&self, scraps: i64) -> Result<Bet>;
}

/// Any `Fn(i64) -> Result<Bet>` closure can be used as a strategy.
impl<F> Strategy for F
where
    F: Fn(i64) -> Result<Bet>,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn place_bet(&self, scraps: i64) -> Result<Bet> {
        self(scraps)
    }
}

/// The built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Everything on Yellow, every spin.
    #[default]
    AllIn,
    /// Half of the scraps (rounded down) on Yellow; the rest sits out.
    HalfOnYellow,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::AllIn, StrategyKind::HalfOnYellow];

    /// Short name used on the command line.
    pub fn cli_name(&self) -> &'static str {
        match self {
            StrategyKind::AllIn => "all-in",
            StrategyKind::HalfOnYellow => "half",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "all-in" | "all" => Ok(StrategyKind::AllIn),
            "half" | "half-on-yellow" => Ok(StrategyKind::HalfOnYellow),
            other => Err(SimError::UnknownStrategy(other.to_string())),
        }
    }
}

impl Strategy for StrategyKind {
    fn name(&self) -> &str {
        match self {
            StrategyKind::AllIn => "All-in on Yellow",
            StrategyKind::HalfOnYellow => "Half on Yellow",
        }
    }

    fn place_bet(&self, scraps: i64) -> Result<Bet> {
        let on_yellow = match self {
            StrategyKind::AllIn => scraps,
            StrategyKind::HalfOnYellow => scraps / 2,
        };
        Ok(Bet::empty().with(Color::Yellow, on_yellow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_wagers_everything_on_yellow() {
        let bet = StrategyKind::AllIn.place_bet(1000).unwrap();
        assert_eq!(bet.wager(Color::Yellow), 1000);
        assert_eq!(bet.total(), Ok(1000));
    }

    #[test]
    fn test_half_rounds_down() {
        let bet = StrategyKind::HalfOnYellow.place_bet(1001).unwrap();
        assert_eq!(bet.wager(Color::Yellow), 500);
        assert_eq!(bet.total(), Ok(500));
    }

    #[test]
    fn test_half_of_negative_truncates_toward_zero() {
        let bet = StrategyKind::HalfOnYellow.place_bet(-3).unwrap();
        assert_eq!(bet.wager(Color::Yellow), -1);
    }

    #[test]
    fn test_from_name_round_trips_cli_names() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.cli_name()), Ok(kind));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(
            StrategyKind::from_name("martingale"),
            Err(SimError::UnknownStrategy("martingale".to_string()))
        );
    }

    #[test]
    fn test_closure_is_a_strategy() {
        let on_red = |scraps: i64| -> Result<Bet> { Ok(Bet::empty().with(Color::Red, scraps / 10)) };
        assert_eq!(on_red.name(), "custom");
        assert_eq!(on_red.place_bet(100).unwrap().wager(Color::Red), 10);
    }

    #[test]
    fn test_closure_can_report_malformed_bet() {
        let sloppy = |scraps: i64| Bet::from_wagers([(Color::Yellow, scraps)]);
        assert!(matches!(
            sloppy.place_bet(10),
            Err(SimError::MalformedBet { .. })
        ));
    }
}
