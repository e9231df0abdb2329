//! Symmetric cipher traits for blockcrypt-symmetric
//!
//! This module defines the traits implemented by the keyed ciphers of the
//! crate.

use crate::encoding;
use crate::error::Result;
use crate::iv::IvPolicy;

/// Common trait for all symmetric encryption algorithms
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}

/// Trait for ciphers driven through a mode of operation and padding scheme
pub trait BlockModeCipher: SymmetricCipher {
    /// Encrypts plaintext, taking the IV from `iv`
    ///
    /// With [`IvPolicy::Embedded`] a fresh IV is generated and prepended to
    /// the returned ciphertext.
    fn encrypt(&self, plaintext: &[u8], iv: &IvPolicy) -> Result<Vec<u8>>;

    /// Decrypts ciphertext, taking the IV from `iv`
    ///
    /// With [`IvPolicy::Embedded`] the IV is read from the first 16 bytes.
    fn decrypt(&self, ciphertext: &[u8], iv: &IvPolicy) -> Result<Vec<u8>>;

    /// Encrypts plaintext and encodes the result as base64
    fn encrypt_base64(&self, plaintext: &[u8], iv: &IvPolicy) -> Result<String> {
        Ok(encoding::encode(&self.encrypt(plaintext, iv)?))
    }

    /// Decodes base64 text and decrypts it
    fn decrypt_base64(&self, text: &str, iv: &IvPolicy) -> Result<Vec<u8>> {
        let ciphertext = encoding::decode(text)?;
        self.decrypt(&ciphertext, iv)
    }
}
