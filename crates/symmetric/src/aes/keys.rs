//! AES-256 key type

use std::fmt;

use algorithms::block::AES256_KEY_SIZE;
use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// A 256-bit AES key, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256Key([u8; AES256_KEY_SIZE]);

impl Aes256Key {
    /// Key size in bytes
    pub const SIZE: usize = AES256_KEY_SIZE;

    /// Generates a new random key from the operating system's CSPRNG
    pub fn generate() -> Self {
        let mut key = [0u8; AES256_KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        Self(key)
    }

    /// Wraps an existing 32-byte array
    pub fn from_bytes(bytes: [u8; AES256_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copies a key from a slice, failing with `InvalidKeyLength` unless it is 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != AES256_KEY_SIZE {
            return Err(Error::InvalidKeyLength {
                expected: AES256_KEY_SIZE,
                actual: bytes.len(),
            });
        }

        let mut key = [0u8; AES256_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Returns the raw key bytes
    pub fn as_bytes(&self) -> &[u8; AES256_KEY_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Aes256Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl PartialEq for Aes256Key {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Aes256Key {}

impl fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes256Key([REDACTED])")
    }
}
