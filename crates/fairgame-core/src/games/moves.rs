//! Validated move sets.

use serde::Serialize;
use thiserror::Error;

/// Errors from move-set validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("expected an odd number of moves (at least 3), got {0}")]
    WrongCount(usize),

    #[error("move {0} is blank")]
    BlankMove(usize),

    #[error("duplicate move: {0}")]
    DuplicateMove(String),
}

/// Ordered, immutable set of move names.
///
/// Order is significant: each move's cyclic neighbors determine the outcome
/// rule. A set is valid iff the count is odd and at least 3, every name is
/// non-blank, and no two names collide case-insensitively.
// Serialize only: a MoveSet must always pass through `new`, so it does not
// implement Deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and build a move set, preserving the given order
    pub fn new(moves: Vec<String>) -> Result<Self, MoveSetError> {
        if moves.len() < 3 || moves.len() % 2 == 0 {
            return Err(MoveSetError::WrongCount(moves.len()));
        }

        let mut seen: Vec<String> = Vec::with_capacity(moves.len());
        for (i, name) in moves.iter().enumerate() {
            if name.trim().is_empty() {
                // report 1-based, matching the numbering the player sees
                return Err(MoveSetError::BlankMove(i + 1));
            }
            let folded = name.to_lowercase();
            if seen.contains(&folded) {
                return Err(MoveSetError::DuplicateMove(name.clone()));
            }
            seen.push(folded);
        }

        Ok(Self(moves))
    }

    /// Number of moves (odd, at least 3)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no moves (never true once validated)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move name at `index`, if in range
    pub fn name(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate names in cycle order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
