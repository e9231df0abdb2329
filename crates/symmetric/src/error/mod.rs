//! Error handling for the AES-256 facade
//!
//! Primitive errors from `blockcrypt-algorithms` convert into [`Error`] with
//! `?`, so callers see a single error type whatever layer failed.

use algorithms::error::Error as PrimitiveError;
use thiserror::Error;

use crate::aes::AesMode;

/// The error type for symmetric encryption operations
///
/// No variant carries key, IV or message bytes.
#[derive(Debug, Error)]
pub enum Error {
    /// The key is not 32 bytes
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The IV is not 16 bytes
    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    /// Input for a block-aligned mode is not a multiple of the block size
    #[error("unaligned input for {context}: {actual} bytes is not a multiple of {block_size}")]
    UnalignedInput {
        context: &'static str,
        block_size: usize,
        actual: usize,
    },

    /// Padding did not match the selected scheme
    #[error("invalid {scheme} padding")]
    InvalidPadding { scheme: &'static str },

    /// Input is shorter than the mode allows
    #[error("input too short for {context}: need at least {minimum} bytes, got {actual}")]
    InvalidInputLength {
        context: &'static str,
        minimum: usize,
        actual: usize,
    },

    /// The input is too short to carry the embedded IV
    #[error("missing IV: {} ciphertext is too short to hold an embedded IV", .0.name())]
    MissingIv(AesMode),

    /// Base64 text could not be decoded
    #[error("invalid base64 input")]
    InvalidBase64(#[source] base64::DecodeError),

    /// The mode does not accept the requested option
    #[error("{} mode does not support {option}", .mode.name())]
    UnsupportedModeOption { mode: AesMode, option: &'static str },

    /// Any other invalid parameter
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

/// Result type for symmetric encryption operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::InvalidKeyLength { expected, actual } => {
                Error::InvalidKeyLength { expected, actual }
            }
            PrimitiveError::InvalidIvLength { expected, actual } => {
                Error::InvalidIvLength { expected, actual }
            }
            PrimitiveError::UnalignedInput {
                context,
                block_size,
                actual,
            } => Error::UnalignedInput {
                context,
                block_size,
                actual,
            },
            PrimitiveError::InvalidPadding { scheme } => Error::InvalidPadding { scheme },
            PrimitiveError::InvalidInputLength {
                context,
                minimum,
                actual,
            } => Error::InvalidInputLength {
                context,
                minimum,
                actual,
            },
            PrimitiveError::Parameter { name, reason } => Error::InvalidParameter { name, reason },
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::InvalidBase64(err)
    }
}
