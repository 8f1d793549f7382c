//! OS-backed entropy seeder.
//!
//! Wraps the operating system's entropy source. Collection may block while
//! the kernel gathers entropy, which is acceptable for a seeder consulted
//! only at reseed boundaries.

use super::seeder::{Seeder, SeederError};
use rand_core::{OsRng, RngCore};

/// Seeder backed by the operating system's entropy source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSeeder;

impl OsSeeder {
    pub fn new() -> Self {
        Self
    }
}

impl Seeder for OsSeeder {
    fn generate_seed(&mut self, length: usize) -> Result<Vec<u8>, SeederError> {
        let mut seed = vec![0u8; length];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| SeederError::Unavailable(e.to_string()))?;
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_seeder_returns_requested_length() {
        let mut seeder = OsSeeder::new();
        assert_eq!(seeder.generate_seed(55).unwrap().len(), 55);
    }

    #[test]
    fn test_os_seeder_output_varies() {
        let mut seeder = OsSeeder::new();
        let first = seeder.generate_seed(32).unwrap();
        let second = seeder.generate_seed(32).unwrap();
        assert_ne!(first, second);
    }
}
