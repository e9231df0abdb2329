//! AES-256 encryption with a selectable mode of operation and padding
//!
//! # Examples
//!
//! ```
//! use blockcrypt_symmetric::{aes_256_decrypt, aes_256_encrypt, AesMode, PaddingMode, Result};
//!
//! fn example() -> Result<()> {
//!     let key = [0x42u8; 32];
//!     let plaintext = b"Secret message";
//!
//!     // A random IV is generated and carried in front of the ciphertext
//!     let ciphertext = aes_256_encrypt(plaintext, &key, true, AesMode::Cbc, PaddingMode::Pkcs7)?;
//!     assert_eq!(ciphertext.len(), 16 + 16);
//!
//!     let decrypted = aes_256_decrypt(&ciphertext, &key, true, AesMode::Cbc, PaddingMode::Pkcs7)?;
//!     assert_eq!(decrypted, plaintext);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Stream modes keep the message length and ignore the padding setting:
//!
//! ```
//! use blockcrypt_symmetric::{aes_256_encrypt, AesMode, Iv, PaddingMode};
//!
//! let iv = Iv::new([7u8; 16]);
//! let ciphertext = aes_256_encrypt(b"hello", &[1u8; 32], &iv, AesMode::Ctr, PaddingMode::Pkcs7).unwrap();
//! assert_eq!(ciphertext.len(), 5);
//! ```

use std::fmt;
use std::str::FromStr;

use algorithms::block::{
    Aes256, BlockCipher, Cbc, Cfb, CipherMode, Ctr, Ecb, Ofb, Xts, AES256_KEY_SIZE,
    AES_BLOCK_SIZE,
};
use algorithms::padding::PaddingMode;
use algorithms::types::Iv;
use hkdf::Hkdf;
use sha2::Sha256;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::cipher::{BlockModeCipher, SymmetricCipher};
use crate::config::CipherConfig;
use crate::error::{Error, Result};
use crate::iv::{self, IvPolicy};

pub mod keys;

pub use keys::Aes256Key;

/// HKDF info string for the XTS tweak key
const XTS_TWEAK_INFO: &[u8] = b"blockcrypt aes-256-xts tweak key";

/// AES mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AesMode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    #[default]
    Cbc,
    /// Output feedback
    Ofb,
    /// Cipher feedback (128-bit)
    Cfb,
    /// Counter
    Ctr,
    /// XEX tweaked codebook with ciphertext stealing
    Xts,
}

impl AesMode {
    /// Every mode, in declaration order
    pub const ALL: [AesMode; 6] = [
        AesMode::Ecb,
        AesMode::Cbc,
        AesMode::Ofb,
        AesMode::Cfb,
        AesMode::Ctr,
        AesMode::Xts,
    ];

    /// Upper-case mode name
    pub fn name(&self) -> &'static str {
        match self {
            AesMode::Ecb => Ecb::<Aes256>::NAME,
            AesMode::Cbc => Cbc::<Aes256>::NAME,
            AesMode::Ofb => Ofb::<Aes256>::NAME,
            AesMode::Cfb => Cfb::<Aes256>::NAME,
            AesMode::Ctr => Ctr::<Aes256>::NAME,
            AesMode::Xts => Xts::<Aes256>::NAME,
        }
    }

    /// Whether the mode consumes an IV (the tweak for XTS)
    pub fn requires_iv(&self) -> bool {
        match self {
            AesMode::Ecb => Ecb::<Aes256>::REQUIRES_IV,
            AesMode::Cbc => Cbc::<Aes256>::REQUIRES_IV,
            AesMode::Ofb => Ofb::<Aes256>::REQUIRES_IV,
            AesMode::Cfb => Cfb::<Aes256>::REQUIRES_IV,
            AesMode::Ctr => Ctr::<Aes256>::REQUIRES_IV,
            AesMode::Xts => Xts::<Aes256>::REQUIRES_IV,
        }
    }

    /// Whether the mode works on whole blocks, so padding applies
    pub fn is_block_aligned(&self) -> bool {
        match self {
            AesMode::Ecb => Ecb::<Aes256>::PADDED,
            AesMode::Cbc => Cbc::<Aes256>::PADDED,
            AesMode::Ofb => Ofb::<Aes256>::PADDED,
            AesMode::Cfb => Cfb::<Aes256>::PADDED,
            AesMode::Ctr => Ctr::<Aes256>::PADDED,
            AesMode::Xts => Xts::<Aes256>::PADDED,
        }
    }
}

impl fmt::Display for AesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AesMode::Ecb => "ecb",
            AesMode::Cbc => "cbc",
            AesMode::Ofb => "ofb",
            AesMode::Cfb => "cfb",
            AesMode::Ctr => "ctr",
            AesMode::Xts => "xts",
        };
        f.write_str(s)
    }
}

impl FromStr for AesMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AesMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or(Error::InvalidParameter {
                name: "mode",
                reason: "unknown AES mode",
            })
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn run<M: CipherMode>(mode: &M, direction: Direction, data: &[u8]) -> Result<Vec<u8>> {
    let output = match direction {
        Direction::Encrypt => mode.encrypt(data)?,
        Direction::Decrypt => mode.decrypt(data)?,
    };
    Ok(output)
}

/// AES-256 bound to a key and a [`CipherConfig`]
///
/// The key schedule is expanded for each operation and zeroized when it
/// completes.
#[derive(Debug, Clone)]
pub struct Aes256Cipher {
    key: Aes256Key,
    config: CipherConfig,
}

impl Aes256Cipher {
    /// Creates a cipher with an explicit configuration
    pub fn with_config(key: &Aes256Key, config: CipherConfig) -> Self {
        Self {
            key: key.clone(),
            config,
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Derive the XTS tweak-key cipher from the data key
    fn tweak_cipher(&self) -> Result<Aes256> {
        let mut tweak_key = Zeroizing::new([0u8; AES256_KEY_SIZE]);
        Hkdf::<Sha256>::new(None, self.key.as_bytes())
            .expand(XTS_TWEAK_INFO, &mut tweak_key[..])
            .map_err(|_| Error::InvalidParameter {
                name: "tweak_key",
                reason: "HKDF output length out of range",
            })?;
        Ok(Aes256::new(&tweak_key[..])?)
    }

    /// Run the configured mode over `data`
    fn apply(&self, direction: Direction, data: &[u8], iv: Option<&Iv>) -> Result<Vec<u8>> {
        let mode = self.config.mode;
        let require_iv = || iv.ok_or(Error::MissingIv(mode));
        let cipher = Aes256::new(self.key.as_bytes())?;

        match mode {
            AesMode::Ecb => run(&Ecb::new(cipher), direction, data),
            AesMode::Cbc => run(&Cbc::new(cipher, require_iv()?), direction, data),
            AesMode::Ofb => run(&Ofb::new(cipher, require_iv()?), direction, data),
            AesMode::Cfb => run(&Cfb::new(cipher, require_iv()?), direction, data),
            AesMode::Ctr => run(&Ctr::new(cipher, require_iv()?), direction, data),
            AesMode::Xts => {
                let xts = Xts::new(cipher, self.tweak_cipher()?, require_iv()?);
                run(&xts, direction, data)
            }
        }
    }

    fn note_ignored_padding(&self) {
        let CipherConfig { mode, padding } = self.config;
        if !mode.is_block_aligned() && padding != PaddingMode::None {
            trace!(%mode, %padding, "padding ignored for stream mode");
        }
    }

    fn encrypt_inner(&self, plaintext: &[u8], policy: &IvPolicy) -> Result<Vec<u8>> {
        let resolved = iv::resolve_for_encrypt(self.config.mode, policy)?;

        let body = if self.config.pads() {
            let padded = Zeroizing::new(self.config.padding.pad(plaintext, AES_BLOCK_SIZE)?);
            self.apply(Direction::Encrypt, &padded, resolved.iv())?
        } else {
            self.note_ignored_padding();
            self.apply(Direction::Encrypt, plaintext, resolved.iv())?
        };

        match resolved.iv() {
            Some(iv) if resolved.is_embedded() => {
                let mut output = Vec::with_capacity(Iv::SIZE + body.len());
                output.extend_from_slice(iv.as_ref());
                output.extend_from_slice(&body);
                Ok(output)
            }
            _ => Ok(body),
        }
    }

    fn decrypt_inner(&self, ciphertext: &[u8], policy: &IvPolicy) -> Result<Vec<u8>> {
        let (iv, body) = iv::resolve_for_decrypt(self.config.mode, ciphertext, policy)?;

        let mut decrypted = Zeroizing::new(self.apply(Direction::Decrypt, body, iv.as_ref())?);
        if self.config.pads() {
            Ok(self.config.padding.unpad(&decrypted, AES_BLOCK_SIZE)?)
        } else {
            self.note_ignored_padding();
            Ok(std::mem::take(&mut *decrypted))
        }
    }
}

impl SymmetricCipher for Aes256Cipher {
    type Key = Aes256Key;

    /// Creates a cipher with the default configuration (CBC, PKCS#7)
    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self::with_config(key, CipherConfig::default()))
    }

    fn name() -> &'static str {
        "AES-256"
    }
}

impl BlockModeCipher for Aes256Cipher {
    fn encrypt(&self, plaintext: &[u8], iv: &IvPolicy) -> Result<Vec<u8>> {
        let CipherConfig { mode, padding } = self.config;
        let result = self.encrypt_inner(plaintext, iv);
        match &result {
            Ok(output) => debug!(
                %mode,
                %padding,
                iv = iv.kind(),
                input_len = plaintext.len(),
                output_len = output.len(),
                "AES-256 encrypt"
            ),
            Err(err) => debug!(%mode, %padding, iv = iv.kind(), error = %err, "AES-256 encrypt failed"),
        }
        result
    }

    fn decrypt(&self, ciphertext: &[u8], iv: &IvPolicy) -> Result<Vec<u8>> {
        let CipherConfig { mode, padding } = self.config;
        let result = self.decrypt_inner(ciphertext, iv);
        match &result {
            Ok(output) => debug!(
                %mode,
                %padding,
                iv = iv.kind(),
                input_len = ciphertext.len(),
                output_len = output.len(),
                "AES-256 decrypt"
            ),
            Err(err) => debug!(%mode, %padding, iv = iv.kind(), error = %err, "AES-256 decrypt failed"),
        }
        result
    }
}

fn cipher_for(key: &[u8], mode: AesMode, padding: PaddingMode) -> Result<Aes256Cipher> {
    let key = Aes256Key::from_slice(key)?;
    Ok(Aes256Cipher::with_config(&key, CipherConfig::new(mode, padding)))
}

/// Encrypts `data` with AES-256
///
/// `iv` is an [`Iv`] (explicit), `true` (generate and embed) or `false`
/// (no IV; modes other than ECB use the all-zero block), or any
/// [`IvPolicy`].
pub fn aes_256_encrypt(
    data: &[u8],
    key: &[u8],
    iv: impl Into<IvPolicy>,
    mode: AesMode,
    padding: PaddingMode,
) -> Result<Vec<u8>> {
    cipher_for(key, mode, padding)?.encrypt(data, &iv.into())
}

/// Decrypts `data` with AES-256
///
/// `iv` mirrors [`aes_256_encrypt`]: with `true` the IV is read from the
/// leading 16 bytes of `data`.
pub fn aes_256_decrypt(
    data: &[u8],
    key: &[u8],
    iv: impl Into<IvPolicy>,
    mode: AesMode,
    padding: PaddingMode,
) -> Result<Vec<u8>> {
    cipher_for(key, mode, padding)?.decrypt(data, &iv.into())
}

/// Encrypts `data` with AES-256 and returns base64 text
pub fn aes_256_encrypt_base64(
    data: &[u8],
    key: &[u8],
    iv: impl Into<IvPolicy>,
    mode: AesMode,
    padding: PaddingMode,
) -> Result<String> {
    cipher_for(key, mode, padding)?.encrypt_base64(data, &iv.into())
}

/// Decodes base64 text and decrypts it with AES-256
pub fn aes_256_decrypt_base64(
    text: &str,
    key: &[u8],
    iv: impl Into<IvPolicy>,
    mode: AesMode,
    padding: PaddingMode,
) -> Result<Vec<u8>> {
    cipher_for(key, mode, padding)?.decrypt_base64(text, &iv.into())
}
