//! Seeder abstraction for high-quality entropy collection.
//!
//! This module provides a trait-based abstraction over slow, high-quality
//! entropy sources, allowing for both OS-backed input and mock
//! implementations for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while collecting seed material.
#[derive(Debug, Error)]
pub enum SeederError {
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
    #[error("entropy source returned {got} bytes, requested {requested}")]
    ShortRead { requested: usize, got: usize },
}

/// Trait for entropy seeder implementations.
///
/// A seeder produces independent, high-entropy bytes used only as seed
/// material for a fast generator. Collection may be slow; callers amortize
/// its cost by reseeding only periodically.
pub trait Seeder {
    /// Produces `length` fresh high-entropy bytes.
    fn generate_seed(&mut self, length: usize) -> Result<Vec<u8>, SeederError>;
}

/// Mock seeder for testing that produces deterministic bytes.
///
/// Every call is recorded in a shared counter, so tests can observe how
/// often the reseed policy consults the seeder even after the seeder has
/// been moved into a random source.
#[derive(Debug)]
pub struct MockSeeder {
    pattern: u8,
    calls: Arc<AtomicU64>,
    fail_after: Option<u64>,
}

impl MockSeeder {
    pub fn new() -> Self {
        Self::with_pattern(0xA5)
    }

    /// Creates a mock seeder whose output bytes derive from `pattern`.
    pub fn with_pattern(pattern: u8) -> Self {
        Self {
            pattern,
            calls: Arc::new(AtomicU64::new(0)),
            fail_after: None,
        }
    }

    /// Creates a mock seeder that fails on its first call.
    pub fn failing() -> Self {
        Self::new().fail_after(0)
    }

    /// Makes the seeder fail once `calls` successful calls have been served.
    pub fn fail_after(mut self, calls: u64) -> Self {
        self.fail_after = Some(calls);
        self
    }

    /// Returns a handle to the call counter.
    pub fn call_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.calls)
    }
}

impl Default for MockSeeder {
    fn default() -> Self {
        Self::new()
    }
}

impl Seeder for MockSeeder {
    fn generate_seed(&mut self, length: usize) -> Result<Vec<u8>, SeederError> {
        let served = self.calls.load(Ordering::Relaxed);
        if let Some(limit) = self.fail_after {
            if served >= limit {
                return Err(SeederError::Unavailable(
                    "mock seeder exhausted".to_string(),
                ));
            }
        }
        self.calls.fetch_add(1, Ordering::Relaxed);

        // Deterministic and distinct per call - NOT entropy, testing only.
        let fill = self.pattern.wrapping_add(served as u8);
        Ok((0..length).map(|i| fill.wrapping_add(i as u8)).collect())
    }
}
