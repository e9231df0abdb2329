//! AES-256 block cipher
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! with 256-bit keys as specified in FIPS 197: a 14-round
//! substitution-permutation network over a 16-byte state.
//!
//! ## Constant-Time Guarantees
//!
//! - The S-box is computed arithmetically (inversion in GF(2⁸) followed by
//!   the affine map), so no secret-indexed table lookups are performed
//! - Multiplication by x in GF(2⁸) uses a mask instead of a branch
//! - Every block runs exactly the same sequence of operations
//!
//! On platforms with AES instructions a hardware backend is faster and
//! equally side-channel resistant; this implementation is portable.

use core::fmt;
use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Block, BlockCipher, CipherAlgorithm, AES256_KEY_SIZE, AES_BLOCK_SIZE};
use crate::error::{validate, Result};

/// Number of rounds for a 256-bit key
const ROUNDS: usize = 14;

/// Number of 32-bit words in the expanded key
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

/// Round constants, indexed by `i / 8` during key expansion
const RCON: [u8; 8] = [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40];

/// Multiply by x in GF(2⁸) modulo x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn xtime(b: u8) -> u8 {
    (b << 1) ^ (0x1b & (b >> 7).wrapping_neg())
}

/// Multiply two field elements without data-dependent branches
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut p = 0u8;
    for _ in 0..8 {
        p ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
    }
    p
}

/// x⁻¹ = x²⁵⁴ in GF(2⁸); maps 0 to 0
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x3 = gf_mul(x2, x);
    let x6 = gf_mul(x3, x3);
    let x12 = gf_mul(x6, x6);
    let x15 = gf_mul(x12, x3);
    let x30 = gf_mul(x15, x15);
    let x60 = gf_mul(x30, x30);
    let x120 = gf_mul(x60, x60);
    let x240 = gf_mul(x120, x120);
    let x252 = gf_mul(x240, x12);
    gf_mul(x252, x2)
}

/// Forward S-box: affine map of the field inverse
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// Inverse S-box: undo the affine map, then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    gf_inv(y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6))
}

fn sub_word(word: &mut [u8; 4]) {
    for byte in word.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// AES-256 block cipher holding the expanded key schedule
///
/// The schedule is wiped when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: [Block; ROUNDS + 1],
}

impl CipherAlgorithm for Aes256 {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl Aes256 {
    /// Performs AES-256 key expansion
    fn expand_key(key: &[u8]) -> Result<[Block; ROUNDS + 1]> {
        validate::key_length(key.len(), AES256_KEY_SIZE)?;

        let mut words = [[0u8; 4]; SCHEDULE_WORDS];
        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
            word.copy_from_slice(chunk);
        }

        for i in 8..SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % 8 == 0 {
                temp.rotate_left(1);
                sub_word(&mut temp);
                temp[0] ^= RCON[i / 8];
            } else if i % 8 == 4 {
                sub_word(&mut temp);
            }
            for j in 0..4 {
                words[i][j] = words[i - 8][j] ^ temp[j];
            }
        }

        let mut round_keys = [[0u8; AES_BLOCK_SIZE]; ROUNDS + 1];
        for (round, round_key) in round_keys.iter_mut().enumerate() {
            for column in 0..4 {
                round_key[column * 4..column * 4 + 4].copy_from_slice(&words[round * 4 + column]);
            }
        }
        words.zeroize();

        Ok(round_keys)
    }

    fn sub_bytes(state: &mut Block) {
        for byte in state.iter_mut() {
            *byte = sbox(*byte);
        }
        compiler_fence(Ordering::SeqCst);
    }

    fn inv_sub_bytes(state: &mut Block) {
        for byte in state.iter_mut() {
            *byte = inv_sbox(*byte);
        }
        compiler_fence(Ordering::SeqCst);
    }

    /// Row `r` rotates left by `r` columns; the state is column-major
    fn shift_rows(state: &mut Block) {
        let old = *state;
        for column in 0..4 {
            for row in 1..4 {
                state[column * 4 + row] = old[((column + row) % 4) * 4 + row];
            }
        }
    }

    fn inv_shift_rows(state: &mut Block) {
        let old = *state;
        for column in 0..4 {
            for row in 1..4 {
                state[((column + row) % 4) * 4 + row] = old[column * 4 + row];
            }
        }
    }

    fn mix_columns(state: &mut Block) {
        for column in state.chunks_exact_mut(4) {
            let (a0, a1, a2, a3) = (column[0], column[1], column[2], column[3]);
            let all = a0 ^ a1 ^ a2 ^ a3;
            column[0] ^= all ^ xtime(a0 ^ a1);
            column[1] ^= all ^ xtime(a1 ^ a2);
            column[2] ^= all ^ xtime(a2 ^ a3);
            column[3] ^= all ^ xtime(a3 ^ a0);
        }
    }

    /// InvMixColumns as a pre-multiplication by {04}x² + {05} followed by MixColumns
    fn inv_mix_columns(state: &mut Block) {
        for column in state.chunks_exact_mut(4) {
            let u = xtime(xtime(column[0] ^ column[2]));
            let v = xtime(xtime(column[1] ^ column[3]));
            column[0] ^= u;
            column[1] ^= v;
            column[2] ^= u;
            column[3] ^= v;
        }
        Self::mix_columns(state);
    }

    #[inline(always)]
    fn add_round_key(state: &mut Block, round_key: &Block) {
        for (s, k) in state.iter_mut().zip(round_key) {
            *s ^= *k;
        }
    }
}

impl BlockCipher for Aes256 {
    fn new(key: &[u8]) -> Result<Self> {
        Ok(Aes256 {
            round_keys: Self::expand_key(key)?,
        })
    }

    fn encrypt_block(&self, block: &mut Block) {
        let mut state = *block;

        Self::add_round_key(&mut state, &self.round_keys[0]);
        for round in 1..ROUNDS {
            Self::sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            Self::mix_columns(&mut state);
            Self::add_round_key(&mut state, &self.round_keys[round]);
        }
        Self::sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        Self::add_round_key(&mut state, &self.round_keys[ROUNDS]);

        *block = state;
        state.zeroize();
    }

    fn decrypt_block(&self, block: &mut Block) {
        let mut state = *block;

        Self::add_round_key(&mut state, &self.round_keys[ROUNDS]);
        for round in (1..ROUNDS).rev() {
            Self::inv_shift_rows(&mut state);
            Self::inv_sub_bytes(&mut state);
            Self::add_round_key(&mut state, &self.round_keys[round]);
            Self::inv_mix_columns(&mut state);
        }
        Self::inv_shift_rows(&mut state);
        Self::inv_sub_bytes(&mut state);
        Self::add_round_key(&mut state, &self.round_keys[0]);

        *block = state;
        state.zeroize();
    }
}

impl fmt::Debug for Aes256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes256([REDACTED])")
    }
}
