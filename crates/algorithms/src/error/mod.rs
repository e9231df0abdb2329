//! Error handling for the block cipher primitives

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// The error type for block cipher primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material has the wrong size for the cipher
    InvalidKeyLength {
        /// Required key length in bytes
        expected: usize,
        /// Supplied key length in bytes
        actual: usize,
    },

    /// Initialization vector has the wrong size
    InvalidIvLength {
        /// Required IV length in bytes
        expected: usize,
        /// Supplied IV length in bytes
        actual: usize,
    },

    /// Input that must be block aligned is not
    UnalignedInput {
        /// Where the unaligned input was found
        context: &'static str,
        /// Block size the input must be a multiple of
        block_size: usize,
        /// Actual input length in bytes
        actual: usize,
    },

    /// Padding bytes do not match the selected scheme
    InvalidPadding {
        /// Padding scheme that rejected the input
        scheme: &'static str,
    },

    /// Input is too short for the selected mode
    InvalidInputLength {
        /// Where the short input was found
        context: &'static str,
        /// Minimum accepted length in bytes
        minimum: usize,
        /// Actual input length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for block cipher primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { expected, actual } => {
                write!(f, "Invalid key length: expected {} bytes, got {}", expected, actual)
            }
            Error::InvalidIvLength { expected, actual } => {
                write!(f, "Invalid IV length: expected {} bytes, got {}", expected, actual)
            }
            Error::UnalignedInput { context, block_size, actual } => {
                write!(
                    f,
                    "Unaligned input for {}: {} bytes is not a multiple of {}",
                    context, actual, block_size
                )
            }
            Error::InvalidPadding { scheme } => write!(f, "Invalid {} padding", scheme),
            Error::InvalidInputLength { context, minimum, actual } => {
                write!(
                    f,
                    "Input too short for {}: need at least {} bytes, got {}",
                    context, minimum, actual
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub mod validate;
