//! Counter (CTR) mode with secure memory handling
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the data.
//!
//! The full 16-byte IV is the initial counter block, treated as one
//! big-endian integer (NIST SP 800-38A, Appendix B.1). By default all 128
//! bits take part in the increment; [`Ctr::with_counter_size`] restricts the
//! increment to the low-order bytes so the rest of the block acts as a fixed
//! nonce. The counter wraps within its width.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{Block, BlockCipher, CipherMode, AES_BLOCK_SIZE};
use crate::error::{validate, Result};
use crate::types::Iv;

/// Counter mode implementation with secure memory handling
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher> {
    cipher: B,
    initial: u128,
    counter: u128,
    mask: u128,
    keystream: Block,
    keystream_pos: usize,
}

impl<B: BlockCipher> Ctr<B> {
    /// Creates a new CTR mode instance using the whole IV as a 128-bit counter
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self::build(cipher, iv, u128::MAX)
    }

    /// Creates a new CTR mode instance incrementing only the last
    /// `counter_size` bytes of the counter block
    ///
    /// * `counter_size` - Width of the counter in bytes (1-16)
    pub fn with_counter_size(cipher: B, iv: &Iv, counter_size: usize) -> Result<Self> {
        validate::parameter(
            (1..=AES_BLOCK_SIZE).contains(&counter_size),
            "counter_size",
            "Counter size must be between 1 and 16 bytes",
        )?;

        let mask = if counter_size == AES_BLOCK_SIZE {
            u128::MAX
        } else {
            (1u128 << (8 * counter_size)) - 1
        };

        Ok(Self::build(cipher, iv, mask))
    }

    fn build(cipher: B, iv: &Iv, mask: u128) -> Self {
        let initial = BigEndian::read_u128(iv.as_block());
        Self {
            cipher,
            initial,
            counter: initial,
            mask,
            keystream: [0u8; AES_BLOCK_SIZE],
            keystream_pos: AES_BLOCK_SIZE,
        }
    }

    /// Adds `n` to the counter, wrapping within the counter width
    fn advance(&self, base: u128, n: u128) -> u128 {
        (base & !self.mask) | (base.wrapping_add(n) & self.mask)
    }

    /// Encrypt the current counter block into the keystream buffer
    fn generate_keystream(&mut self) {
        BigEndian::write_u128(&mut self.keystream, self.counter);
        self.cipher.encrypt_block(&mut self.keystream);
        self.counter = self.advance(self.counter, 1);
        self.keystream_pos = 0;
    }

    /// XORs the keystream into `data` in place, continuing from the current position
    ///
    /// Successive calls continue the same keystream, so a message may be
    /// processed in pieces of any size.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        compiler_fence(Ordering::SeqCst);

        for byte in data.iter_mut() {
            if self.keystream_pos == AES_BLOCK_SIZE {
                self.generate_keystream();
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }

        compiler_fence(Ordering::SeqCst);
    }

    /// Seek to the start of keystream block `block_index`
    ///
    /// Block 0 is the block produced by the initial counter value.
    pub fn seek(&mut self, block_index: u64) {
        self.counter = self.advance(self.initial, block_index as u128);
        self.keystream.zeroize();
        self.keystream_pos = AES_BLOCK_SIZE;
    }
}

impl<B: BlockCipher> CipherMode for Ctr<B> {
    const NAME: &'static str = "CTR";
    const REQUIRES_IV: bool = true;
    const PADDED: bool = false;

    /// Encrypts from the initial counter, leaving `self` untouched
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut stream = self.clone();
        stream.seek(0);

        let mut output = plaintext.to_vec();
        stream.apply_keystream(&mut output);
        Ok(output)
    }

    /// In CTR mode, encryption and decryption are the same operation
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }
}
