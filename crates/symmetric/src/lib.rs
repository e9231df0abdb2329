//! AES-256 encryption for the blockcrypt library
//!
//! This crate provides the caller-facing layer built on top of the
//! primitives in `blockcrypt-algorithms`: a keyed AES-256 cipher with a
//! selectable mode of operation and padding scheme, IV management, and
//! base64 text encoding of ciphertext.

#![forbid(unsafe_code)]

pub mod aes;
pub mod cipher;
pub mod config;
pub mod encoding;
pub mod error;
pub mod iv;

// Re-export main types for convenience
pub use aes::{
    aes_256_decrypt, aes_256_decrypt_base64, aes_256_encrypt, aes_256_encrypt_base64,
    Aes256Cipher, Aes256Key, AesMode,
};
pub use cipher::{BlockModeCipher, SymmetricCipher};
pub use config::CipherConfig;
pub use error::{Error, Result};
pub use iv::{generate_iv, generate_random_bytes, IvPolicy, ResolvedIv};

// Re-export the primitive types that appear in this crate's API
pub use algorithms::padding::PaddingMode;
pub use algorithms::types::Iv;
