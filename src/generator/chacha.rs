//! ChaCha-based core generator.
//!
//! Wraps the standard ChaCha20 CSPRNG with supplemental seeding: applied
//! seed bytes are hash-mixed with retained seed material instead of
//! replacing the stream state outright.
//!
//! # Seeding Model
//!
//! Each `set_seed` call derives new material by mixing:
//! - Previous seed material (retained across seedings)
//! - The newly applied seed bytes
//! - A domain separator and mix counter
//!
//! This follows NIST SP 800-90A style DRBG reseeding logic: non-linear
//! mixing via a cryptographic hash ensures that biased or partially
//! predictable inputs cannot degrade security.

use super::mix::{MixAlgorithm, SeedMixer};
use super::traits::CoreGenerator;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use zeroize::Zeroize;

/// A ChaCha20 generator with supplemental seeding.
///
/// The generator is initialized from OS entropy; seed bytes applied later
/// *supplement* that initial state. Previous material is always retained
/// in the mix, so compromising seed inputs alone cannot predict outputs.
pub struct ChaChaGenerator {
    /// The underlying ChaCha20 CSPRNG.
    inner: ChaCha20Rng,
    /// Retained seed material for mixing. NOT the ChaCha internal state.
    seed_material: [u8; 32],
    /// Mixer used to fold applied seeds into retained material.
    mixer: SeedMixer,
    /// Total seeds applied.
    mix_count: u64,
}

impl ChaChaGenerator {
    /// Creates a new generator seeded from the OS entropy source.
    pub fn from_os_entropy() -> Self {
        Self::with_mixer(MixAlgorithm::default())
    }

    /// Creates a generator using the specified mixing algorithm.
    pub fn with_mixer(algorithm: MixAlgorithm) -> Self {
        let mut seed_material = [0u8; 32];
        OsRng.fill_bytes(&mut seed_material);

        Self {
            inner: ChaCha20Rng::from_seed(seed_material),
            seed_material,
            mixer: SeedMixer::new(algorithm),
            mix_count: 0,
        }
    }

    /// Creates a generator from a known seed (for testing only).
    #[cfg(test)]
    pub(crate) fn from_seed_for_testing(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            seed_material: seed,
            mixer: SeedMixer::new(MixAlgorithm::default()),
            mix_count: 0,
        }
    }

    /// Returns how many seeds have been mixed in.
    pub fn mix_count(&self) -> u64 {
        self.mix_count
    }
}

impl CoreGenerator for ChaChaGenerator {
    fn set_seed(&mut self, seed: &[u8]) {
        self.seed_material = self.mixer.mix(self.mix_count, &self.seed_material, seed);
        self.inner = ChaCha20Rng::from_seed(self.seed_material);
        self.mix_count += 1;

        tracing::debug!(mix_count = self.mix_count, "seed material mixed into generator");
    }

    fn next_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }
}

impl Drop for ChaChaGenerator {
    fn drop(&mut self) {
        self.seed_material.zeroize();
    }
}
