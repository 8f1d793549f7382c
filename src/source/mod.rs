//! Reseeding random source.
//!
//! This module contains the reseeding policy core: a source that tracks
//! bytes serviced per seed epoch and threads seed material from the
//! seeder to the core generator, plus its policy parameters and a
//! rand_core adapter.

mod policy;
mod reseeding;
mod rng;

pub use policy::{PolicyError, ReseedPolicy};
pub use reseeding::{RandomSourceError, ReseedingRandomSource};
