//! Update strategy for compound read-modify-write operations.
//!
//! Completing an event or changing its markets reads the current value,
//! builds a replacement and publishes it. Two callers doing this on the same
//! id at the same time both start from the same prior value, so the strategy
//! decides what happens to the slower one.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How compound updates publish their replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConcurrencyMode {
    /// Publish with compare-and-swap and rebuild from the fresh value when
    /// another writer got there first. No update is ever lost.
    #[default]
    Optimistic,

    /// Publish unconditionally. Concurrent updates to the same id race and
    /// the last writer silently discards the others.
    Unchecked,
}

impl ConcurrencyMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Unchecked => "unchecked",
        }
    }
}

impl fmt::Display for ConcurrencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown concurrency mode `{0}` (expected `optimistic` or `unchecked`)")]
pub struct ParseConcurrencyModeError(String);

impl FromStr for ConcurrencyMode {
    type Err = ParseConcurrencyModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(Self::Optimistic),
            "unchecked" => Ok(Self::Unchecked),
            other => Err(ParseConcurrencyModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "Optimistic".parse::<ConcurrencyMode>().unwrap(),
            ConcurrencyMode::Optimistic
        );
        assert_eq!(
            " UNCHECKED ".parse::<ConcurrencyMode>().unwrap(),
            ConcurrencyMode::Unchecked
        );
    }

    #[test]
    fn rejects_unknown_modes() {
        let err = "pessimistic".parse::<ConcurrencyMode>().unwrap_err();
        assert!(err.to_string().contains("pessimistic"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in [ConcurrencyMode::Optimistic, ConcurrencyMode::Unchecked] {
            assert_eq!(mode.to_string().parse::<ConcurrencyMode>().unwrap(), mode);
        }
        assert_eq!(ConcurrencyMode::default(), ConcurrencyMode::Optimistic);
    }
}
