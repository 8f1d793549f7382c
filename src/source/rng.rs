//! rand_core adapter.
//!
//! Implements `RngCore` and `CryptoRng` for the reseeding source so it
//! can be substituted wherever the ecosystem expects a random source,
//! e.g. any API generic over `R: RngCore + CryptoRng`.

use super::reseeding::ReseedingRandomSource;
use crate::entropy::Seeder;
use crate::generator::CoreGenerator;
use rand_core::{impls, CryptoRng, Error, RngCore};

impl<S: Seeder, G: CoreGenerator> RngCore for ReseedingRandomSource<S, G> {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // RngCore's infallible contract: a failed reseed is unrecoverable.
        if let Err(e) = self.next_bytes(dest) {
            panic!("reseeding random source failed: {}", e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.next_bytes(dest).map_err(Error::new)
    }
}

impl<S: Seeder, G: CoreGenerator> CryptoRng for ReseedingRandomSource<S, G> {}
