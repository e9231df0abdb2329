//! Type-safe wrappers for cipher inputs

pub mod iv;

pub use iv::Iv;
