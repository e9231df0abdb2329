//! Output Feedback (OFB) mode
//!
//! The keystream is produced by repeatedly encrypting the IV, feeding each
//! output back as the next input. Encryption and decryption are the same
//! XOR, no padding is needed and the output length equals the input length.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::{xor_in_place, Block, BlockCipher, CipherMode, AES_BLOCK_SIZE};
use crate::error::Result;
use crate::types::Iv;

/// OFB mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb<B: BlockCipher> {
    cipher: B,
    iv: Iv,
}

impl<B: BlockCipher> Ofb<B> {
    /// Creates a new OFB mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            iv: iv.clone(),
        }
    }

    /// XORs the keystream into `data` in place
    pub fn process(&self, data: &mut [u8]) {
        let mut keystream: Zeroizing<Block> = Zeroizing::new(*self.iv.as_block());
        for chunk in data.chunks_mut(AES_BLOCK_SIZE) {
            self.cipher.encrypt_block(&mut keystream);
            xor_in_place(chunk, &keystream[..]);
        }
    }
}

impl<B: BlockCipher> CipherMode for Ofb<B> {
    const NAME: &'static str = "OFB";
    const REQUIRES_IV: bool = true;
    const PADDED: bool = false;

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut output = plaintext.to_vec();
        self.process(&mut output);
        Ok(output)
    }

    /// In OFB mode, encryption and decryption are the same operation
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }
}
