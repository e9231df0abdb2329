//! Block cipher and modes of operation
//!
//! ## Example usage
//!
//! ```
//! use blockcrypt_algorithms::block::{Aes256, BlockCipher, CipherMode};
//! use blockcrypt_algorithms::block::modes::Cbc;
//! use blockcrypt_algorithms::types::Iv;
//!
//! let cipher = Aes256::new(&[0x42u8; 32]).unwrap();
//! let mode = Cbc::new(cipher, &Iv::new([0x24u8; 16]));
//!
//! let plaintext = b"exactly thirty-two bytes long!!!";
//! let ciphertext = mode.encrypt(plaintext).unwrap();
//! let decrypted = mode.decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(plaintext, &decrypted[..]);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::error::Result;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::Aes256;
pub use modes::{Cbc, Cfb, Ctr, Ecb, Ofb, Xts};

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// A single cipher block
pub type Block = [u8; AES_BLOCK_SIZE];

/// Compile-time properties of a cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// A 128-bit block cipher with an expanded key schedule
pub trait BlockCipher: CipherAlgorithm + Clone + Zeroize {
    /// Expands `key` into a schedule, failing with `InvalidKeyLength` on a wrong-sized key
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut Block);

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }
}

/// A mode of operation driving a block cipher over arbitrary-length data
pub trait CipherMode {
    /// Mode name
    const NAME: &'static str;

    /// Whether the mode consumes an IV (or tweak)
    const REQUIRES_IV: bool;

    /// Whether the mode needs block-aligned input, so padding is meaningful
    const PADDED: bool;

    /// Encrypts `plaintext`, returning a freshly allocated ciphertext
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext`, returning a freshly allocated plaintext
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// XORs `src` into `dst` byte by byte over the shorter of the two
#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}
