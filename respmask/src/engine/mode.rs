//! Traversal modes.

use std::{fmt, str::FromStr};

/// Selects how the selectors of a [`RuleSet`](super::RuleSet) are interpreted.
///
/// Exactly one mode governs a masking call; selectors of both conventions
/// cannot be mixed in one rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    /// Selectors are dot-joined key paths from the root (`"profile.user.email"`).
    /// Arrays add no path segment.
    Exact,
    /// Selectors are bare key names matched at any depth (`"email"`).
    Recursive,
}

impl Mode {
    /// The lowercase name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Exact => "exact",
            Mode::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is neither `exact` nor `recursive`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown masking mode `{0}`, expected `exact` or `recursive`")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("exact") {
            Ok(Mode::Exact)
        } else if s.eq_ignore_ascii_case("recursive") {
            Ok(Mode::Recursive)
        } else {
            Err(ParseModeError(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_case_insensitively() {
        assert_eq!("exact".parse::<Mode>(), Ok(Mode::Exact));
        assert_eq!("Recursive".parse::<Mode>(), Ok(Mode::Recursive));
        assert_eq!(Mode::Recursive.to_string(), "recursive");
    }

    #[test]
    fn refuses_unknown_modes() {
        assert_eq!(
            "deep".parse::<Mode>(),
            Err(ParseModeError("deep".to_string()))
        );
        assert!("".parse::<Mode>().is_err());
    }
}
