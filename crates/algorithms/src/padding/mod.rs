//! Block padding schemes
//!
//! Padding extends a message to a whole number of cipher blocks and is
//! removed again after decryption. Each scheme is a unit type implementing
//! [`PaddingScheme`]; [`PaddingMode`] is the closed set of schemes callers
//! select from at runtime and dispatches to them.
//!
//! ```
//! use blockcrypt_algorithms::padding::PaddingMode;
//!
//! let padded = PaddingMode::Pkcs7.pad(b"YELLOW SUBMARINE!", 16).unwrap();
//! assert_eq!(padded.len(), 32);
//! assert_eq!(padded[31], 15);
//!
//! let data = PaddingMode::Pkcs7.unpad(&padded, 16).unwrap();
//! assert_eq!(data, b"YELLOW SUBMARINE!");
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

use crate::error::{validate, Error, Result};

/// A padding scheme over blocks of at most 255 bytes
pub trait PaddingScheme {
    /// Human-readable scheme name, used in error messages
    const NAME: &'static str;

    /// Appends padding to `buf` so its length becomes a multiple of `block_size`
    fn pad_into<R: RngCore + CryptoRng>(buf: &mut Vec<u8>, block_size: usize, rng: &mut R);

    /// Returns the unpadded length of `data`
    ///
    /// `data` is already known to be a multiple of `block_size`.
    fn unpad_len(data: &[u8], block_size: usize) -> Result<usize>;
}

/// Number of bytes needed to reach the next block boundary, always in `1..=block_size`
#[inline(always)]
fn fill_count(len: usize, block_size: usize) -> usize {
    block_size - (len % block_size)
}

/// Checks that `count` lies in `1..=block_size` without branching on it
#[inline(always)]
fn count_in_range(count: u8, block_size: usize) -> Choice {
    count.ct_gt(&0) & !count.ct_gt(&(block_size as u8))
}

/// No padding; the data must already be block aligned
#[derive(Debug, Clone, Copy)]
pub struct NoPadding;

impl PaddingScheme for NoPadding {
    const NAME: &'static str = "None";

    fn pad_into<R: RngCore + CryptoRng>(_buf: &mut Vec<u8>, _block_size: usize, _rng: &mut R) {}

    fn unpad_len(data: &[u8], _block_size: usize) -> Result<usize> {
        Ok(data.len())
    }
}

/// PKCS#7: `n` bytes each holding the value `n`
#[derive(Debug, Clone, Copy)]
pub struct Pkcs7;

impl PaddingScheme for Pkcs7 {
    const NAME: &'static str = "PKCS7";

    fn pad_into<R: RngCore + CryptoRng>(buf: &mut Vec<u8>, block_size: usize, _rng: &mut R) {
        let count = fill_count(buf.len(), block_size);
        buf.resize(buf.len() + count, count as u8);
    }

    fn unpad_len(data: &[u8], block_size: usize) -> Result<usize> {
        let Some(&count) = data.last() else {
            return Err(Error::InvalidPadding { scheme: Self::NAME });
        };

        // Walk the whole final block so timing does not reveal where the
        // first mismatching byte is
        let block = &data[data.len() - block_size..];
        let mut valid = count_in_range(count, block_size);
        for (i, byte) in block.iter().rev().enumerate() {
            let in_padding = (i as u8).ct_lt(&count);
            valid &= !in_padding | byte.ct_eq(&count);
        }

        validate::padding(bool::from(valid), Self::NAME)?;
        Ok(data.len() - count as usize)
    }
}

/// ISO/IEC 7816-4: a `0x80` marker followed by zero bytes
#[derive(Debug, Clone, Copy)]
pub struct Iso7816_4;

impl PaddingScheme for Iso7816_4 {
    const NAME: &'static str = "ISO 7816-4";

    fn pad_into<R: RngCore + CryptoRng>(buf: &mut Vec<u8>, block_size: usize, _rng: &mut R) {
        let count = fill_count(buf.len(), block_size);
        buf.push(0x80);
        buf.resize(buf.len() + count - 1, 0x00);
    }

    fn unpad_len(data: &[u8], block_size: usize) -> Result<usize> {
        if data.is_empty() {
            return Err(Error::InvalidPadding { scheme: Self::NAME });
        }

        let start = data.len() - block_size;
        match data[start..].iter().rposition(|&b| b != 0x00) {
            Some(i) if data[start + i] == 0x80 => Ok(start + i),
            _ => Err(Error::InvalidPadding { scheme: Self::NAME }),
        }
    }
}

/// ANSI X9.23: zero bytes followed by a count byte
#[derive(Debug, Clone, Copy)]
pub struct AnsiX923;

impl PaddingScheme for AnsiX923 {
    const NAME: &'static str = "ANSI X9.23";

    fn pad_into<R: RngCore + CryptoRng>(buf: &mut Vec<u8>, block_size: usize, _rng: &mut R) {
        let count = fill_count(buf.len(), block_size);
        buf.resize(buf.len() + count - 1, 0x00);
        buf.push(count as u8);
    }

    fn unpad_len(data: &[u8], block_size: usize) -> Result<usize> {
        let Some(&count) = data.last() else {
            return Err(Error::InvalidPadding { scheme: Self::NAME });
        };

        let block = &data[data.len() - block_size..];
        let mut valid = count_in_range(count, block_size);
        for (i, byte) in block.iter().rev().enumerate().skip(1) {
            let in_padding = (i as u8).ct_lt(&count);
            valid &= !in_padding | byte.ct_eq(&0);
        }

        validate::padding(bool::from(valid), Self::NAME)?;
        Ok(data.len() - count as usize)
    }
}

/// ISO 10126: random filler bytes followed by a count byte
///
/// Only the count byte is checked on removal; the filler is unpredictable.
#[derive(Debug, Clone, Copy)]
pub struct Iso10126;

impl PaddingScheme for Iso10126 {
    const NAME: &'static str = "ISO 10126";

    fn pad_into<R: RngCore + CryptoRng>(buf: &mut Vec<u8>, block_size: usize, rng: &mut R) {
        let count = fill_count(buf.len(), block_size);
        let start = buf.len();
        buf.resize(start + count - 1, 0x00);
        rng.fill_bytes(&mut buf[start..]);
        buf.push(count as u8);
    }

    fn unpad_len(data: &[u8], block_size: usize) -> Result<usize> {
        let Some(&count) = data.last() else {
            return Err(Error::InvalidPadding { scheme: Self::NAME });
        };

        validate::padding(bool::from(count_in_range(count, block_size)), Self::NAME)?;
        Ok(data.len() - count as usize)
    }
}

/// Zero padding: zero bytes up to the block boundary, nothing if already aligned
///
/// Removal strips every trailing zero of the final block, so data that
/// itself ends in zero bytes does not survive a round trip.
#[derive(Debug, Clone, Copy)]
pub struct ZeroPadding;

impl PaddingScheme for ZeroPadding {
    const NAME: &'static str = "Zero";

    fn pad_into<R: RngCore + CryptoRng>(buf: &mut Vec<u8>, block_size: usize, _rng: &mut R) {
        let rem = buf.len() % block_size;
        if rem != 0 {
            buf.resize(buf.len() + block_size - rem, 0x00);
        }
    }

    fn unpad_len(data: &[u8], block_size: usize) -> Result<usize> {
        if data.is_empty() {
            return Ok(0);
        }

        let start = data.len() - block_size;
        let kept = data[start..]
            .iter()
            .rposition(|&b| b != 0x00)
            .map_or(0, |i| i + 1);
        Ok(start + kept)
    }
}

/// The padding scheme applied before a block-aligned mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PaddingMode {
    /// No padding; input must be block aligned
    None,
    /// PKCS#7
    #[default]
    Pkcs7,
    /// ISO/IEC 7816-4 (`0x80` then zeros)
    #[cfg_attr(feature = "serde", serde(rename = "iso7816-4"))]
    Iso7816_4,
    /// ANSI X9.23 (zeros then count)
    AnsiX923,
    /// ISO 10126 (random then count)
    Iso10126,
    /// Zero bytes
    Zero,
}

impl PaddingMode {
    /// Every padding mode, in declaration order
    pub const ALL: [PaddingMode; 6] = [
        PaddingMode::None,
        PaddingMode::Pkcs7,
        PaddingMode::Iso7816_4,
        PaddingMode::AnsiX923,
        PaddingMode::Iso10126,
        PaddingMode::Zero,
    ];

    /// Human-readable name of the scheme
    pub fn name(&self) -> &'static str {
        match self {
            PaddingMode::None => NoPadding::NAME,
            PaddingMode::Pkcs7 => Pkcs7::NAME,
            PaddingMode::Iso7816_4 => Iso7816_4::NAME,
            PaddingMode::AnsiX923 => AnsiX923::NAME,
            PaddingMode::Iso10126 => Iso10126::NAME,
            PaddingMode::Zero => ZeroPadding::NAME,
        }
    }

    /// Pads `data` to a multiple of `block_size`, drawing ISO 10126 filler from the OS
    pub fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        self.pad_with_rng(data, block_size, &mut OsRng)
    }

    /// Pads `data` to a multiple of `block_size` with a caller-supplied RNG
    pub fn pad_with_rng<R: RngCore + CryptoRng>(
        &self,
        data: &[u8],
        block_size: usize,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        check_block_size(block_size)?;
        if *self == PaddingMode::None {
            validate::block_aligned("unpadded input", data.len(), block_size)?;
        }

        let mut buf = Vec::with_capacity(data.len() + block_size);
        buf.extend_from_slice(data);
        match self {
            PaddingMode::None => NoPadding::pad_into(&mut buf, block_size, rng),
            PaddingMode::Pkcs7 => Pkcs7::pad_into(&mut buf, block_size, rng),
            PaddingMode::Iso7816_4 => Iso7816_4::pad_into(&mut buf, block_size, rng),
            PaddingMode::AnsiX923 => AnsiX923::pad_into(&mut buf, block_size, rng),
            PaddingMode::Iso10126 => Iso10126::pad_into(&mut buf, block_size, rng),
            PaddingMode::Zero => ZeroPadding::pad_into(&mut buf, block_size, rng),
        }
        Ok(buf)
    }

    /// Removes padding from `data`, returning the original message
    ///
    /// Fails with `UnalignedInput` if `data` is not a multiple of
    /// `block_size` and with `InvalidPadding` if the padding is malformed.
    pub fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size(block_size)?;
        validate::block_aligned("padded input", data.len(), block_size)?;

        let len = match self {
            PaddingMode::None => NoPadding::unpad_len(data, block_size)?,
            PaddingMode::Pkcs7 => Pkcs7::unpad_len(data, block_size)?,
            PaddingMode::Iso7816_4 => Iso7816_4::unpad_len(data, block_size)?,
            PaddingMode::AnsiX923 => AnsiX923::unpad_len(data, block_size)?,
            PaddingMode::Iso10126 => Iso10126::unpad_len(data, block_size)?,
            PaddingMode::Zero => ZeroPadding::unpad_len(data, block_size)?,
        };
        Ok(data[..len].to_vec())
    }
}

fn check_block_size(block_size: usize) -> Result<()> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block_size",
        "Block size must be between 1 and 255 bytes",
    )
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaddingMode::None => "none",
            PaddingMode::Pkcs7 => "pkcs7",
            PaddingMode::Iso7816_4 => "iso7816-4",
            PaddingMode::AnsiX923 => "ansi-x923",
            PaddingMode::Iso10126 => "iso10126",
            PaddingMode::Zero => "zero",
        };
        f.write_str(s)
    }
}

impl FromStr for PaddingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mode = match s.to_ascii_lowercase().as_str() {
            "none" | "nopadding" => PaddingMode::None,
            "pkcs7" | "pkcs#7" | "pkcs5" => PaddingMode::Pkcs7,
            "iso7816-4" | "iso7816_4" | "iso7816" => PaddingMode::Iso7816_4,
            "ansi-x923" | "ansix923" | "ansi923" | "x923" => PaddingMode::AnsiX923,
            "iso10126" => PaddingMode::Iso10126,
            "zero" | "zeros" => PaddingMode::Zero,
            _ => return Err(Error::param("padding", "Unknown padding scheme")),
        };
        Ok(mode)
    }
}
