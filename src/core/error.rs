//! Errors raised by the simulation engine.

use crate::wheel::Color;

/// Failures the engine reports instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// A loosely built bet left out one or more colours.
    #[error("malformed bet: no wager given for {}", format_colors(.missing))]
    MalformedBet { missing: Vec<Color> },

    /// Scraps arithmetic left the range of a signed 64-bit integer.
    #[error("scraps overflowed the 64-bit range")]
    ScrapsOverflow,

    #[error("unknown strategy '{0}' (expected 'all-in' or 'half')")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

fn format_colors(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_bet_message_lists_missing_colors() {
        let err = SimError::MalformedBet {
            missing: vec![Color::Purple, Color::Red],
        };
        assert_eq!(
            err.to_string(),
            "malformed bet: no wager given for Purple, Red"
        );
    }

    #[test]
    fn test_unknown_strategy_message() {
        let err = SimError::UnknownStrategy("martingale".to_string());
        assert!(err.to_string().contains("martingale"));
    }
}
