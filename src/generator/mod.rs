//! Fast pseudorandom generation capabilities.
//!
//! This module provides the core-generator abstraction used for fast byte
//! production, a ChaCha20-backed implementation with supplemental seeding,
//! and a mock for testing. A core generator is assumed cryptographically
//! strong but seed-bounded; output from any single seed is bounded by the
//! caller's reseed policy.

mod chacha;
mod mix;
mod traits;

pub use chacha::ChaChaGenerator;
pub use mix::{MixAlgorithm, SeedMixer};
pub use traits::{CoreGenerator, MockGenerator};
