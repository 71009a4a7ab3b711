//! Round lifecycle for the commit-reveal game.
//!
//! A round moves through commit, resolve, and reveal in a fixed order. The
//! ordering is enforced by the types: a [`CommittedRound`] exposes only the
//! commitment, and the secret key becomes readable only from the
//! [`RevealedRound`] produced once the player's move is locked in.

use crate::crypto::{Commitment, CryptoError, SecretKey};
use crate::games::{CycleResolver, MoveSet};
use crate::protocol::RoundOutcome;
use rand::Rng;
use thiserror::Error;

/// Errors from round resolution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("move index {index} out of range for {move_count} moves")]
    MoveOutOfRange { index: usize, move_count: usize },
}

/// A round whose computer move is fixed and committed but not yet revealed
#[derive(Debug)]
pub struct CommittedRound<'a> {
    moves: &'a MoveSet,
    computer_index: usize,
    computer_move: &'a str,
    secret: SecretKey,
    commitment: Commitment,
}

impl<'a> CommittedRound<'a> {
    /// Open a round: pick a uniformly random computer move and commit to it.
    ///
    /// Fails only if the secure random source for the key is unavailable.
    pub fn open(moves: &'a MoveSet) -> Result<Self, CryptoError> {
        let computer_index = rand::thread_rng().gen_range(0..moves.len());
        Self::with_move(moves, computer_index)
    }

    /// Open a round with a fixed computer move.
    ///
    /// Panics if `computer_index` is out of range.
    pub fn with_move(moves: &'a MoveSet, computer_index: usize) -> Result<Self, CryptoError> {
        let computer_move = moves
            .name(computer_index)
            .expect("computer move index out of range");
        let secret = SecretKey::generate()?;
        let commitment = Commitment::new(computer_move, &secret);

        Ok(Self {
            moves,
            computer_index,
            computer_move,
            secret,
            commitment,
        })
    }

    /// The published commitment, the only state observable before the
    /// player's move is locked in
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The move set this round is played over
    pub fn moves(&self) -> &MoveSet {
        self.moves
    }

    /// Lock in the player's move, decide the outcome, and reveal the key.
    ///
    /// Consumes the round; there is no way back to the committed state, so
    /// a revealed key can never precede a locked-in move.
    pub fn resolve(self, player_index: usize) -> Result<RevealedRound<'a>, RoundError> {
        let player_move = self
            .moves
            .name(player_index)
            .ok_or(RoundError::MoveOutOfRange {
                index: player_index,
                move_count: self.moves.len(),
            })?;

        let resolver = CycleResolver::new(self.moves.len());
        let outcome = resolver.resolve(player_index, self.computer_index);

        Ok(RevealedRound {
            player_index,
            player_move,
            computer_index: self.computer_index,
            computer_move: self.computer_move,
            outcome,
            secret: self.secret,
            commitment: self.commitment,
        })
    }
}

/// A finished round: outcome decided, key revealed
#[derive(Debug)]
pub struct RevealedRound<'a> {
    player_index: usize,
    player_move: &'a str,
    computer_index: usize,
    computer_move: &'a str,
    outcome: RoundOutcome,
    secret: SecretKey,
    commitment: Commitment,
}

impl RevealedRound<'_> {
    /// Outcome from the player's point of view: `FirstWins` means the
    /// player won
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// The player's move index (0-based)
    pub fn player_index(&self) -> usize {
        self.player_index
    }

    /// The player's move name
    pub fn player_move(&self) -> &str {
        self.player_move
    }

    /// The computer's move index (0-based)
    pub fn computer_index(&self) -> usize {
        self.computer_index
    }

    /// The computer's move name
    pub fn computer_move(&self) -> &str {
        self.computer_move
    }

    /// The revealed secret key
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    /// The commitment published at the start of the round
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Recompute the commitment from the revealed move and key
    pub fn verify(&self) -> bool {
        self.commitment.verify(self.computer_move, &self.secret)
    }
}
