//! Secret keys for the commit-reveal scheme.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from cryptographic operations
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("secure random source unavailable: {0}")]
    RandomSource(rand::Error),

    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("expected a {expected}-byte key, got {actual} bytes")]
    InvalidKeyLength { expected: usize, actual: usize },
}

/// 256-bit secret key, generated fresh for every round and never reused
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Key length in bytes
    pub const LEN: usize = 32;

    /// Generate a new key from the operating system's secure random source.
    ///
    /// Fails if the source is unavailable; there is no fallback that
    /// preserves the fairness guarantee.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut bytes = [0u8; Self::LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(CryptoError::RandomSource)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a key from its hex rendering, as printed at reveal time
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(hex_str)?;
        if bytes.len() != Self::LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; Self::LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex for the reveal step
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys_are_distinct() {
        let key1 = SecretKey::generate().unwrap();
        let key2 = SecretKey::generate().unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_hex_roundtrip() {
        let key = SecretKey::generate().unwrap();
        let parsed = SecretKey::from_hex(&key.to_hex()).unwrap();

        assert_eq!(key.as_bytes(), parsed.as_bytes());
    }

    #[test]
    fn test_hex_is_lowercase_and_full_length() {
        let key = SecretKey::from_bytes([0xAB; 32]);
        let hex_str = key.to_hex();

        assert_eq!(hex_str.len(), 64);
        assert_eq!(hex_str, hex_str.to_lowercase());
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        let result = SecretKey::from_hex("deadbeef");

        assert!(matches!(
            result,
            Err(CryptoError::InvalidKeyLength {
                expected: 32,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_from_hex_rejects_invalid_characters() {
        let result = SecretKey::from_hex(&"zz".repeat(32));

        assert!(matches!(result, Err(CryptoError::InvalidHex(_))));
    }

    #[test]
    fn test_debug_does_not_leak_full_key() {
        let key = SecretKey::from_bytes([0x42; 32]);
        let debug = format!("{:?}", key);

        assert!(!debug.contains(&key.to_hex()));
    }
}
