//! Base64 text encoding for ciphertext
//!
//! Standard alphabet with `=` padding. Decoding is strict: characters
//! outside the alphabet, missing or extra padding and non-canonical trailing
//! bits are all rejected with [`Error::InvalidBase64`](crate::Error::InvalidBase64).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::Result;

/// Encode bytes as standard base64
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64 text
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}
