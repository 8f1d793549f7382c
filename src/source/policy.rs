//! Reseed policy parameters.
//!
//! The policy bounds how many bytes a seed epoch may service and how much
//! seed material each reseed requests. Both values are fixed at
//! construction; changing them mid-stream would blur epoch accounting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Policy parameters for automatic reseeding.
///
/// Defaults follow NIST SP 800-90A guidance for SHA-family PRNGs: 440 seed
/// bits (55 bytes) support up to 2^48 bytes between reseeds, so one GiB
/// per epoch is comfortably conservative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReseedPolicy {
    /// Maximum bytes serviced per seed epoch.
    pub reseed_threshold: u64,
    /// Bytes requested from the seeder per reseed.
    pub seed_length: usize,
}

impl Default for ReseedPolicy {
    fn default() -> Self {
        Self {
            reseed_threshold: 1 << 30,
            seed_length: 55,
        }
    }
}

impl ReseedPolicy {
    /// Creates a policy with the given threshold and seed length.
    pub fn new(reseed_threshold: u64, seed_length: usize) -> Self {
        Self {
            reseed_threshold,
            seed_length,
        }
    }

    /// Validates the policy parameters.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.reseed_threshold == 0 {
            return Err(PolicyError::InvalidThreshold);
        }
        if self.seed_length == 0 {
            return Err(PolicyError::InvalidSeedLength);
        }
        Ok(())
    }
}

/// Policy validation errors.
#[derive(Debug, Clone, Error)]
pub enum PolicyError {
    #[error("reseed threshold must be greater than zero")]
    InvalidThreshold,
    #[error("seed length must be greater than zero")]
    InvalidSeedLength,
}
