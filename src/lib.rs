//! Reseeding Random Source Library
//!
//! A cryptographically-safe random byte source that combines a slow,
//! high-quality entropy seeder with a fast generator that is periodically
//! reseeded. Bounding the output produced from any single seed limits
//! exposure if the fast generator's internal state is ever compromised,
//! and amortizes the cost of expensive entropy collection.
//!
//! # Architecture
//!
//! ```text
//! caller → reseed check → core generator → caller
//!              ↓
//!           seeder (on epoch exhaustion)
//! ```
//!
//! # Design Principles
//!
//! - **Bounded epochs**: no seed ever services more than the configured
//!   threshold of output
//! - **Fail-fatal**: seeder failures stop generation; there is no fallback
//!   to stale seed material
//! - **Supplemental seeding**: applied seeds are hash-mixed with retained
//!   material, never replacing generator state outright
//! - **Uses standard primitives**: ChaCha20 for generation, BLAKE3/SHA-256
//!   for seed mixing
//!
//! # Example
//!
//! ```
//! use reseeding_random::{
//!     entropy::OsSeeder,
//!     generator::ChaChaGenerator,
//!     source::{ReseedPolicy, ReseedingRandomSource},
//! };
//!
//! let source = ReseedingRandomSource::new(
//!     OsSeeder::new(),
//!     ChaChaGenerator::from_os_entropy(),
//!     ReseedPolicy::new(1 << 20, 32),
//! )
//! .unwrap();
//!
//! let mut bytes = [0u8; 64];
//! source.next_bytes(&mut bytes).unwrap();
//! assert_eq!(source.bytes_since_reseed(), 64);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod entropy;
pub mod generator;
pub mod source;

// Re-export commonly used types at crate root
pub use config::{ConfigError, FileConfig, GeneratorConfig, OutputConfig};
pub use entropy::{MockSeeder, OsSeeder, Seeder, SeederError};
pub use generator::{ChaChaGenerator, CoreGenerator, MixAlgorithm, MockGenerator, SeedMixer};
pub use source::{PolicyError, RandomSourceError, ReseedPolicy, ReseedingRandomSource};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
