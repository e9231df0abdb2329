//! Validation utilities for block cipher primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a key length
#[inline(always)]
pub fn key_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength { expected, actual });
    }
    Ok(())
}

/// Validate an IV length
#[inline(always)]
pub fn iv_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvLength { expected, actual });
    }
    Ok(())
}

/// Validate that a length is a whole number of blocks
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::UnalignedInput {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum input length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, minimum: usize) -> Result<()> {
    if actual < minimum {
        return Err(Error::InvalidInputLength {
            context,
            minimum,
            actual,
        });
    }
    Ok(())
}

/// Validate a padding check result
#[inline(always)]
pub fn padding(is_valid: bool, scheme: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::InvalidPadding { scheme });
    }
    Ok(())
}
