//! Round lifecycle types.

mod round;
mod types;

pub use round::{CommittedRound, RevealedRound, RoundError};
pub use types::RoundOutcome;
