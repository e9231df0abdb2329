//! XEX-based tweaked codebook mode with ciphertext stealing (XTS), IEEE 1619
//!
//! XTS is built for storage encryption: every data unit (sector) is
//! encrypted under a tweak derived from its number, so identical plaintext
//! in different sectors yields different ciphertext without expanding the
//! data. Two independent keys are used: the data key encrypts the blocks and
//! the tweak key encrypts the tweak.
//!
//! For block `j` of a data unit the mask is `T_j = E_K2(tweak) * α^j` in
//! GF(2^128), and `C_j = E_K1(P_j ⊕ T_j) ⊕ T_j`. A data unit whose length is
//! not a multiple of the block size is handled by ciphertext stealing, so the
//! ciphertext always has the length of the plaintext. Data units shorter than
//! one block are rejected.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use byteorder::{ByteOrder, LittleEndian};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{xor_in_place, Block, BlockCipher, CipherMode, AES_BLOCK_SIZE};
use crate::error::{validate, Result};
use crate::types::Iv;

/// Multiply a tweak by the primitive element α of GF(2^128)
///
/// The tweak is read little-endian; the reduction polynomial is
/// x^128 + x^7 + x^2 + x + 1.
#[inline(always)]
pub(crate) fn mul_alpha(tweak: &mut Block) {
    let t = LittleEndian::read_u128(tweak);
    let carry = t >> 127;
    let t = (t << 1) ^ (0x87 & carry.wrapping_neg());
    LittleEndian::write_u128(tweak, t);
}

/// XTS mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Xts<B: BlockCipher> {
    data_cipher: B,
    tweak_cipher: B,
    tweak: Iv,
}

impl<B: BlockCipher> Xts<B> {
    /// Creates a new XTS mode instance
    ///
    /// * `data_cipher` - Cipher keyed with the data key (K1)
    /// * `tweak_cipher` - Cipher keyed with the tweak key (K2)
    /// * `tweak` - The 16-byte tweak, usually [`Iv::from_sector`]
    pub fn new(data_cipher: B, tweak_cipher: B, tweak: &Iv) -> Self {
        Self {
            data_cipher,
            tweak_cipher,
            tweak: tweak.clone(),
        }
    }

    /// Creates a new XTS mode instance from concatenated key material
    ///
    /// `key` is the data key followed by the tweak key, twice the cipher's
    /// key size in total. The two halves must differ.
    pub fn from_key_material(key: &[u8], tweak: &Iv) -> Result<Self> {
        validate::key_length(key.len(), 2 * B::KEY_SIZE)?;

        let (data_key, tweak_key) = key.split_at(B::KEY_SIZE);
        validate::parameter(
            !bool::from(data_key.ct_eq(tweak_key)),
            "key",
            "XTS data key and tweak key must differ",
        )?;

        Ok(Self::new(B::new(data_key)?, B::new(tweak_key)?, tweak))
    }

    /// The encrypted tweak for block 0
    fn initial_mask(&self) -> Block {
        let mut mask = *self.tweak.as_block();
        self.tweak_cipher.encrypt_block(&mut mask);
        mask
    }

    fn xex_encrypt(&self, block: &mut Block, mask: &Block) {
        xor_in_place(block, mask);
        self.data_cipher.encrypt_block(block);
        xor_in_place(block, mask);
    }

    fn xex_decrypt(&self, block: &mut Block, mask: &Block) {
        xor_in_place(block, mask);
        self.data_cipher.decrypt_block(block);
        xor_in_place(block, mask);
    }

    fn check_length(len: usize, context: &'static str) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        validate::min_length(context, len, AES_BLOCK_SIZE)
    }
}

impl<B: BlockCipher> CipherMode for Xts<B> {
    const NAME: &'static str = "XTS";
    const REQUIRES_IV: bool = true;
    const PADDED: bool = true;

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Self::check_length(plaintext.len(), "XTS input")?;
        if plaintext.is_empty() {
            return Ok(Vec::new());
        }

        let full = plaintext.len() / AES_BLOCK_SIZE;
        let rem = plaintext.len() % AES_BLOCK_SIZE;
        let regular = if rem == 0 { full } else { full - 1 };

        let mut output = Vec::with_capacity(plaintext.len());
        let mut mask = self.initial_mask();
        let mut block: Block = [0u8; AES_BLOCK_SIZE];

        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE).take(regular) {
            block.copy_from_slice(chunk);
            self.xex_encrypt(&mut block, &mask);
            output.extend_from_slice(&block);
            mul_alpha(&mut mask);
        }

        if rem != 0 {
            let start = regular * AES_BLOCK_SIZE;
            let tail = &plaintext[start + AES_BLOCK_SIZE..];

            // Encrypt the last full block, then steal its tail
            let mut stolen: Block = [0u8; AES_BLOCK_SIZE];
            stolen.copy_from_slice(&plaintext[start..start + AES_BLOCK_SIZE]);
            self.xex_encrypt(&mut stolen, &mask);
            mul_alpha(&mut mask);

            block[..rem].copy_from_slice(tail);
            block[rem..].copy_from_slice(&stolen[rem..]);
            self.xex_encrypt(&mut block, &mask);

            output.extend_from_slice(&block);
            output.extend_from_slice(&stolen[..rem]);
            stolen.zeroize();
        }

        block.zeroize();
        mask.zeroize();
        Ok(output)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Self::check_length(ciphertext.len(), "XTS input")?;
        if ciphertext.is_empty() {
            return Ok(Vec::new());
        }

        let full = ciphertext.len() / AES_BLOCK_SIZE;
        let rem = ciphertext.len() % AES_BLOCK_SIZE;
        let regular = if rem == 0 { full } else { full - 1 };

        let mut output = Vec::with_capacity(ciphertext.len());
        let mut mask = self.initial_mask();
        let mut block: Block = [0u8; AES_BLOCK_SIZE];

        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE).take(regular) {
            block.copy_from_slice(chunk);
            self.xex_decrypt(&mut block, &mask);
            output.extend_from_slice(&block);
            mul_alpha(&mut mask);
        }

        if rem != 0 {
            let start = regular * AES_BLOCK_SIZE;
            let tail = &ciphertext[start + AES_BLOCK_SIZE..];

            // The second-to-last block was encrypted under the next mask
            let mut next_mask = mask;
            mul_alpha(&mut next_mask);

            let mut stolen: Block = [0u8; AES_BLOCK_SIZE];
            stolen.copy_from_slice(&ciphertext[start..start + AES_BLOCK_SIZE]);
            self.xex_decrypt(&mut stolen, &next_mask);

            block[..rem].copy_from_slice(tail);
            block[rem..].copy_from_slice(&stolen[rem..]);
            self.xex_decrypt(&mut block, &mask);

            output.extend_from_slice(&block);
            output.extend_from_slice(&stolen[..rem]);
            stolen.zeroize();
            next_mask.zeroize();
        }

        block.zeroize();
        mask.zeroize();
        Ok(output)
    }
}
