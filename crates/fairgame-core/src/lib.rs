//! Fairgame Core Library
//!
//! This crate provides the core logic for a provably-fair cyclic move game:
//! - Commit-reveal primitives (SecretKey, Commitment)
//! - Move-set validation and the cyclic win rule
//! - Round lifecycle from commitment to reveal

pub mod crypto;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, CryptoError, SecretKey};
pub use games::{CycleResolver, MoveSet, MoveSetError};
pub use protocol::{CommittedRound, RevealedRound, RoundError, RoundOutcome};
