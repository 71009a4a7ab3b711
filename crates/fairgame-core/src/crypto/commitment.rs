//! Move commitments for the commit-reveal scheme.

use super::SecretKey;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Commitment = HMAC-SHA256(key = secret, message = move name)
///
/// Published before the opposing move is chosen; once the key is revealed,
/// anyone can recompute the MAC and check it byte-for-byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to a move under the given secret key
    pub fn new(move_name: &str, key: &SecretKey) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        let result = mac.finalize().into_bytes();
        Self(result.into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given move and key reproduce this commitment.
    ///
    /// The comparison covers the full 32 bytes and runs in constant time.
    pub fn verify(&self, move_name: &str, key: &SecretKey) -> bool {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
