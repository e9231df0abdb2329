//! Cipher Feedback (CFB) mode, full-block (CFB128) variant
//!
//! The previous ciphertext block (or the IV) is encrypted to produce the
//! keystream for the current block. A short final block is allowed, so the
//! ciphertext has exactly the length of the plaintext.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::{xor_in_place, Block, BlockCipher, CipherMode, AES_BLOCK_SIZE};
use crate::error::Result;
use crate::types::Iv;

/// CFB128 mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cfb<B: BlockCipher> {
    cipher: B,
    iv: Iv,
}

impl<B: BlockCipher> Cfb<B> {
    /// Creates a new CFB mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            iv: iv.clone(),
        }
    }
}

impl<B: BlockCipher> CipherMode for Cfb<B> {
    const NAME: &'static str = "CFB";
    const REQUIRES_IV: bool = true;
    const PADDED: bool = false;

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = plaintext.to_vec();
        let mut register: Zeroizing<Block> = Zeroizing::new(*self.iv.as_block());

        for chunk in ciphertext.chunks_mut(AES_BLOCK_SIZE) {
            self.cipher.encrypt_block(&mut register);
            xor_in_place(chunk, &register[..]);
            // Feed the ciphertext back; a short tail is always the last chunk
            register[..chunk.len()].copy_from_slice(chunk);
        }

        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut plaintext = ciphertext.to_vec();
        let mut register: Zeroizing<Block> = Zeroizing::new(*self.iv.as_block());

        for (chunk, source) in plaintext
            .chunks_mut(AES_BLOCK_SIZE)
            .zip(ciphertext.chunks(AES_BLOCK_SIZE))
        {
            self.cipher.encrypt_block(&mut register);
            xor_in_place(chunk, &register[..]);
            register[..source.len()].copy_from_slice(source);
        }

        Ok(plaintext)
    }
}
