//! Error types.
//!
//! The only failure the engine reports is a malformed round configuration.
//! Late input (answers or ticks outside a running round) is a no-op, not an
//! error.

use thiserror::Error;

/// What was wrong with a rejected configuration.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
    /// Round duration was zero.
    #[error("round duration must be greater than zero")]
    ZeroDuration,
    /// Fewer than two distinct colors to draw from.
    #[error("need at least 2 distinct colors, got {distinct}")]
    TooFewColors { distinct: usize },
}

/// Crate error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
}

impl GameError {
    /// The configuration problem, if this is a configuration error.
    #[must_use]
    pub fn config_issue(&self) -> Option<ConfigIssue> {
        match self {
            GameError::InvalidConfiguration(issue) => Some(*issue),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidConfiguration(ConfigIssue::ZeroDuration);
        assert_eq!(
            err.to_string(),
            "invalid configuration: round duration must be greater than zero"
        );

        let err = GameError::InvalidConfiguration(ConfigIssue::TooFewColors { distinct: 1 });
        assert_eq!(
            err.to_string(),
            "invalid configuration: need at least 2 distinct colors, got 1"
        );
        assert_eq!(err.config_issue(), Some(ConfigIssue::TooFewColors { distinct: 1 }));
    }

    #[test]
    fn test_issue_is_error_source() {
        use std::error::Error as _;

        let issue = ConfigIssue::TooFewColors { distinct: 0 };
        assert_eq!(issue.to_string(), "need at least 2 distinct colors, got 0");

        let err = GameError::InvalidConfiguration(issue);
        assert!(err.source().is_none());
    }
}
