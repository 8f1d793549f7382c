//! Entropy seeding capabilities.
//!
//! This module provides the seeder abstraction used to obtain high-quality
//! seed material, along with an OS-backed implementation and a mock for
//! testing. The seeder is treated as slow; its cost is amortized by the
//! reseed policy consulting it only at epoch boundaries.

mod os;
mod seeder;

pub use os::OsSeeder;
pub use seeder::{MockSeeder, Seeder, SeederError};
