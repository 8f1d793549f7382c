//! Seed material mixing.
//!
//! Uses standard hash functions to fold new seed bytes into retained seed
//! material, so that supplemental seeding never discards entropy already
//! present in the generator.

use blake3::Hasher as Blake3Hasher;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Domain separator for seed mixing operations.
/// Ensures the hash context is distinct from other uses.
const MIX_DOMAIN: &[u8] = b"reseeding-random-mix-v1";

/// Supported hash algorithms for seed mixing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixAlgorithm {
    /// BLAKE3 - fast, secure, recommended default.
    #[default]
    Blake3,
    /// SHA-256 - widely deployed, conservative choice.
    Sha256,
}

/// Mixes new seed bytes into retained seed material.
///
/// The derived material is `H(domain || counter || retained || seed)`.
/// Non-linear mixing via a cryptographic hash ensures that biased or
/// partially predictable seed inputs cannot degrade the state they
/// supplement.
#[derive(Debug, Clone, Copy)]
pub struct SeedMixer {
    algorithm: MixAlgorithm,
}

impl SeedMixer {
    /// Creates a new mixer with the specified algorithm.
    pub fn new(algorithm: MixAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Derives new seed material from retained material and fresh seed bytes.
    pub fn mix(&self, counter: u64, retained: &[u8; 32], seed: &[u8]) -> [u8; 32] {
        match self.algorithm {
            MixAlgorithm::Blake3 => {
                let mut hasher = Blake3Hasher::new();
                hasher.update(MIX_DOMAIN);
                hasher.update(&counter.to_le_bytes());
                hasher.update(retained);
                hasher.update(seed);
                *hasher.finalize().as_bytes()
            }
            MixAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(MIX_DOMAIN);
                hasher.update(counter.to_le_bytes());
                hasher.update(retained);
                hasher.update(seed);
                hasher.finalize().into()
            }
        }
    }
}
