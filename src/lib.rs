//! # blockcrypt
//!
//! AES-256 with the ECB, CBC, OFB, CFB, CTR and XTS modes of operation,
//! standard padding schemes, IV management and base64 helpers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blockcrypt = "0.3"
//! ```
//!
//! ```
//! use blockcrypt::prelude::*;
//!
//! let key = Aes256Key::generate();
//! let text = aes_256_encrypt_base64(b"hello", key.as_bytes(), true, AesMode::Cbc, PaddingMode::Pkcs7).unwrap();
//! let plain = aes_256_decrypt_base64(&text, key.as_bytes(), true, AesMode::Cbc, PaddingMode::Pkcs7).unwrap();
//! assert_eq!(plain, b"hello");
//! ```
//!
//! Decrypted buffers can be wiped with the re-exported `zeroize`:
//!
//! ```
//! use blockcrypt::prelude::*;
//! use blockcrypt::zeroize::Zeroize;
//!
//! let key = [7u8; 32];
//! let iv = Iv::new([1u8; 16]);
//! let ciphertext = aes_256_encrypt(b"pin: 1234", &key, &iv, AesMode::Ctr, PaddingMode::None).unwrap();
//! let mut plain = aes_256_decrypt(&ciphertext, &key, &iv, AesMode::Ctr, PaddingMode::None).unwrap();
//! assert_eq!(plain, b"pin: 1234");
//! plain.zeroize();
//! assert!(plain.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `symmetric` (default): The AES-256 facade, IV management and base64 helpers
//! - `serde`: `Serialize`/`Deserialize` for the mode, padding and config types
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`blockcrypt-algorithms`]: AES-256, modes of operation and padding (`no_std`)
//! - [`blockcrypt-symmetric`]: The keyed AES-256 facade

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use blockcrypt_algorithms as algorithms;

// Feature-gated re-exports
#[cfg(feature = "symmetric")]
pub use blockcrypt_symmetric as symmetric;

// Memory hygiene and constant-time helpers used by the public types
pub use subtle;
pub use zeroize;

/// Common imports for blockcrypt users
pub mod prelude {
    // Primitive traits and types
    pub use crate::algorithms::{
        Aes256, BlockCipher, CipherMode, Iv, PaddingMode,
    };

    // The facade
    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        aes_256_decrypt, aes_256_decrypt_base64, aes_256_encrypt, aes_256_encrypt_base64,
        Aes256Cipher, Aes256Key, AesMode, BlockModeCipher, CipherConfig, Error, IvPolicy, Result,
        SymmetricCipher,
    };
}
