//! Constant-time AES-256, block cipher modes and padding schemes
//!
//! This crate holds the primitives behind `blockcrypt`: the AES-256 block
//! cipher, the ECB, CBC, OFB, CFB, CTR and XTS modes of operation, and the
//! block padding schemes. It is usable in both `std` and `no_std`
//! environments (the mode drivers need `alloc`).
//!
//! # Security Features
//!
//! - The AES S-box is computed arithmetically, with no secret-indexed tables
//! - Key schedules and keystream buffers are zeroized on drop
//! - PKCS#7 and ANSI X9.23 padding checks run in constant time

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher and modes of operation
pub mod block;
pub use block::{
    Aes256, BlockCipher, Cbc, Cfb, CipherAlgorithm, CipherMode, Ctr, Ecb, Ofb, Xts,
    AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

// Padding schemes
pub mod padding;
pub use padding::{PaddingMode, PaddingScheme};

// Type system
pub mod types;
pub use types::Iv;
