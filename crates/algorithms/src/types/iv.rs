//! Initialization vector type
//!
//! A single AES block used to seed the chaining and keystream modes, or
//! as the XTS tweak (data-unit number).

use byteorder::{ByteOrder, LittleEndian};
use core::fmt;
use core::ops::Deref;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::block::{Block, AES_BLOCK_SIZE};
use crate::error::{validate, Result};

/// 16-byte initialization vector
#[derive(Clone, Zeroize)]
pub struct Iv {
    data: Block,
}

impl Iv {
    /// Size of an IV in bytes
    pub const SIZE: usize = AES_BLOCK_SIZE;

    /// Create a new IV from an existing array
    pub fn new(data: Block) -> Self {
        Self { data }
    }

    /// Create an all-zero IV
    pub fn zeroed() -> Self {
        Self { data: [0u8; AES_BLOCK_SIZE] }
    }

    /// Create from a slice, failing with `InvalidIvLength` unless it is exactly one block
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::iv_length(slice.len(), Self::SIZE)?;

        let mut data = [0u8; AES_BLOCK_SIZE];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Build an XTS tweak from a data-unit (sector) number, little-endian
    pub fn from_sector(sector: u128) -> Self {
        let mut data = [0u8; AES_BLOCK_SIZE];
        LittleEndian::write_u128(&mut data, sector);
        Self { data }
    }

    /// Generate a random IV
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; AES_BLOCK_SIZE];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// The IV as a block
    pub fn as_block(&self) -> &Block {
        &self.data
    }
}

impl AsRef<[u8]> for Iv {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for Iv {
    type Target = Block;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Block> for Iv {
    fn from(data: Block) -> Self {
        Self::new(data)
    }
}

impl TryFrom<&[u8]> for Iv {
    type Error = crate::error::Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl PartialEq for Iv {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl Eq for Iv {}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Iv([REDACTED])")
    }
}
