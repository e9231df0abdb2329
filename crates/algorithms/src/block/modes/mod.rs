//! Block cipher modes of operation
//!
//! This module implements the modes of operation for 128-bit block ciphers:
//! the block-aligned modes ECB, CBC and XTS, and the stream-like modes OFB,
//! CFB and CTR. Every mode implements [`CipherMode`](super::CipherMode).

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;
pub mod xts;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;
pub use xts::Xts;
