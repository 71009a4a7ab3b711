//! Round outcome type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one round, as a function of two move indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl RoundOutcome {
    /// Convert to a short display string
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::FirstWins => "first wins",
            RoundOutcome::SecondWins => "second wins",
            RoundOutcome::Draw => "draw",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
