//! Cipher configuration
//!
//! ```
//! use blockcrypt_symmetric::{AesMode, CipherConfig, PaddingMode};
//!
//! let config = CipherConfig::default();
//! assert_eq!(config.mode, AesMode::Cbc);
//! assert_eq!(config.padding, PaddingMode::Pkcs7);
//!
//! let ctr = CipherConfig::new(AesMode::Ctr, PaddingMode::None);
//! assert!(!ctr.pads());
//! ```

use algorithms::padding::PaddingMode;

use crate::aes::AesMode;

/// Mode of operation and padding scheme for an AES-256 cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CipherConfig {
    /// Mode of operation, CBC unless set
    pub mode: AesMode,
    /// Padding scheme, PKCS#7 unless set
    pub padding: PaddingMode,
}

impl CipherConfig {
    /// Creates a configuration from a mode and padding scheme
    pub fn new(mode: AesMode, padding: PaddingMode) -> Self {
        Self { mode, padding }
    }

    /// Returns a copy with the mode replaced
    pub fn with_mode(mut self, mode: AesMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy with the padding scheme replaced
    pub fn with_padding(mut self, padding: PaddingMode) -> Self {
        self.padding = padding;
        self
    }

    /// Whether the padding engine runs for this configuration
    ///
    /// Stream modes never pad. XTS without padding relies on ciphertext
    /// stealing instead.
    pub fn pads(&self) -> bool {
        self.mode.is_block_aligned() && !(self.mode == AesMode::Xts && self.padding == PaddingMode::None)
    }
}
