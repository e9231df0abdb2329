//! Testing utilities and benchmarks for the blockcrypt library
pub mod vectors;
