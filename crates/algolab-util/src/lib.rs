//! Seeded random data generation.
//!
//! Everything that feeds randomized inputs into the engine goes through
//! [`Fuzzer`], an explicitly seeded PRNG wrapper, so any run can be
//! reproduced from its seed.

pub mod fuzzer;

pub use fuzzer::Fuzzer;
