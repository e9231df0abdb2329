//! Electronic Codebook (ECB) mode
//!
//! Each block is encrypted independently, so identical plaintext blocks
//! produce identical ciphertext blocks. Kept for interoperability only.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{Block, BlockCipher, CipherMode, AES_BLOCK_SIZE};
use crate::error::{validate, Result};

/// ECB mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates a new ECB mode instance with the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    fn process(&self, input: &[u8], context: &'static str, encrypt: bool) -> Result<Vec<u8>> {
        validate::block_aligned(context, input.len(), AES_BLOCK_SIZE)?;

        let mut output = Vec::with_capacity(input.len());
        let mut block: Block = [0u8; AES_BLOCK_SIZE];
        for chunk in input.chunks_exact(AES_BLOCK_SIZE) {
            block.copy_from_slice(chunk);
            if encrypt {
                self.cipher.encrypt_block(&mut block);
            } else {
                self.cipher.decrypt_block(&mut block);
            }
            output.extend_from_slice(&block);
        }
        block.zeroize();

        Ok(output)
    }
}

impl<B: BlockCipher> CipherMode for Ecb<B> {
    const NAME: &'static str = "ECB";
    const REQUIRES_IV: bool = false;
    const PADDED: bool = true;

    /// The plaintext must be a multiple of the block size.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, "ECB plaintext", true)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, "ECB ciphertext", false)
    }
}
