//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode provides confidentiality by XORing each plaintext block with
//! the previous ciphertext block before encryption. The first block is
//! XORed with the initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. Input must be block
//! aligned; padding is the caller's concern (see [`crate::padding`]).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{xor_in_place, Block, BlockCipher, CipherMode, AES_BLOCK_SIZE};
use crate::error::{validate, Result};
use crate::types::Iv;

/// CBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: Iv,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            iv: iv.clone(),
        }
    }
}

impl<B: BlockCipher> CipherMode for Cbc<B> {
    const NAME: &'static str = "CBC";
    const REQUIRES_IV: bool = true;
    const PADDED: bool = true;

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC plaintext", plaintext.len(), AES_BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block: Block = *self.iv.as_block();

        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
            // Chain with the previous ciphertext block (or IV for the first block)
            xor_in_place(&mut prev_block, chunk);
            self.cipher.encrypt_block(&mut prev_block);
            ciphertext.extend_from_slice(&prev_block);
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// The ciphertext must be a multiple of the block size.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_block: Block = *self.iv.as_block();
        let mut block: Block = [0u8; AES_BLOCK_SIZE];

        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
            block.copy_from_slice(chunk);
            self.cipher.decrypt_block(&mut block);
            xor_in_place(&mut block, &prev_block);
            plaintext.extend_from_slice(&block);
            prev_block.copy_from_slice(chunk);
        }
        block.zeroize();

        Ok(plaintext)
    }
}
