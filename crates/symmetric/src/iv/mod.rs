//! Initialization vector management
//!
//! An [`IvPolicy`] says where the IV of an operation comes from: the caller
//! supplies it, or it is generated on encryption and carried as the first
//! 16 bytes of the ciphertext, or none is given. Modes that need an IV run
//! with the all-zero block when none is given. The resolve functions check
//! the policy against the mode before any data is touched.

use algorithms::types::Iv;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::aes::AesMode;
use crate::error::{Error, Result};

/// Where the IV for an operation comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IvPolicy {
    /// The caller supplies the IV and keeps track of it
    Explicit(Iv),
    /// A random IV is generated on encryption and prepended to the
    /// ciphertext; decryption reads it back from the leading bytes
    Embedded,
    /// No IV; IV-based modes fall back to the all-zero block
    None,
}

impl IvPolicy {
    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            IvPolicy::Explicit(_) => "explicit",
            IvPolicy::Embedded => "embedded",
            IvPolicy::None => "none",
        }
    }
}

impl From<bool> for IvPolicy {
    /// `true` embeds a generated IV, `false` uses none
    fn from(use_iv: bool) -> Self {
        if use_iv {
            IvPolicy::Embedded
        } else {
            IvPolicy::None
        }
    }
}

impl From<Iv> for IvPolicy {
    fn from(iv: Iv) -> Self {
        IvPolicy::Explicit(iv)
    }
}

impl From<&Iv> for IvPolicy {
    fn from(iv: &Iv) -> Self {
        IvPolicy::Explicit(iv.clone())
    }
}

/// The IV chosen for an encryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIv {
    /// The mode takes no IV
    None,
    /// Caller-supplied IV, not written to the output
    Explicit(Iv),
    /// Freshly generated IV, written in front of the ciphertext
    Generated(Iv),
}

impl ResolvedIv {
    /// The IV to run the mode with, if any
    pub fn iv(&self) -> Option<&Iv> {
        match self {
            ResolvedIv::None => None,
            ResolvedIv::Explicit(iv) | ResolvedIv::Generated(iv) => Some(iv),
        }
    }

    /// Whether the IV must be prepended to the ciphertext
    pub fn is_embedded(&self) -> bool {
        matches!(self, ResolvedIv::Generated(_))
    }
}

fn check_mode(mode: AesMode, policy: &IvPolicy) -> Result<()> {
    match (mode.requires_iv(), policy) {
        (true, _) | (false, IvPolicy::None) => Ok(()),
        (false, _) => Err(Error::UnsupportedModeOption {
            mode,
            option: "an IV",
        }),
    }
}

/// IV used when a mode needs one and the policy supplies none
///
/// The all-zero block, as OpenSSL uses for an empty IV.
fn implicit_iv(mode: AesMode) -> Option<Iv> {
    mode.requires_iv().then(Iv::zeroed)
}

/// Choose the IV for an encryption under `policy`
pub fn resolve_for_encrypt(mode: AesMode, policy: &IvPolicy) -> Result<ResolvedIv> {
    check_mode(mode, policy)?;

    Ok(match policy {
        IvPolicy::Explicit(iv) => ResolvedIv::Explicit(iv.clone()),
        IvPolicy::Embedded => ResolvedIv::Generated(generate_iv()),
        IvPolicy::None => match implicit_iv(mode) {
            Some(iv) => ResolvedIv::Explicit(iv),
            None => ResolvedIv::None,
        },
    })
}

/// Find the IV for a decryption under `policy`
///
/// Returns the IV and the remaining ciphertext; with [`IvPolicy::Embedded`]
/// the IV is split off the front of `input`.
pub fn resolve_for_decrypt<'a>(
    mode: AesMode,
    input: &'a [u8],
    policy: &IvPolicy,
) -> Result<(Option<Iv>, &'a [u8])> {
    check_mode(mode, policy)?;

    match policy {
        IvPolicy::Explicit(iv) => Ok((Some(iv.clone()), input)),
        IvPolicy::Embedded => {
            if input.len() < Iv::SIZE {
                return Err(Error::MissingIv(mode));
            }
            let (iv, rest) = input.split_at(Iv::SIZE);
            Ok((Some(Iv::from_slice(iv)?), rest))
        }
        IvPolicy::None => Ok((implicit_iv(mode), input)),
    }
}

/// Generate a random IV from the operating system's CSPRNG
pub fn generate_iv() -> Iv {
    Iv::random(&mut OsRng)
}

/// Generate `len` random bytes from the operating system's CSPRNG
pub fn generate_random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}
