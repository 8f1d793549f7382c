//! The reseeding random source.
//!
//! Wraps a fast core generator that gets reseeded from a slow,
//! high-quality seeder after a configured number of bytes has been
//! generated.
//!
//! # Reseeding Model
//!
//! Every seed epoch services at most `reseed_threshold` bytes. Before a
//! request is serviced, the source checks whether it would push the epoch
//! past the threshold; if so, fresh seed material is obtained from the
//! seeder and applied to the core generator first. Bounding output per
//! seed limits exposure if the fast generator's state is ever
//! compromised, and amortizes the cost of slow entropy collection.

use std::sync::{Mutex, MutexGuard};

use super::policy::{PolicyError, ReseedPolicy};
use crate::entropy::{Seeder, SeederError};
use crate::generator::CoreGenerator;
use thiserror::Error;
use zeroize::Zeroize;

/// Errors that can occur while operating a reseeding random source.
#[derive(Debug, Error)]
pub enum RandomSourceError {
    #[error("invalid reseed policy: {0}")]
    Policy(#[from] PolicyError),
    #[error("initialization failed: {0}")]
    Initialization(#[source] SeederError),
    #[error("reseed failed: {0}")]
    Reseed(#[source] SeederError),
}

/// State guarded by the source's lock.
///
/// The threshold check, reseed, and counter update must form a single
/// critical section; interleaving them would let a seed epoch service
/// more than the threshold.
struct Epoch<S, G> {
    seeder: S,
    core: G,
    bytes_since_reseed: u64,
    reseed_count: u64,
}

/// A random source that bounds output per seed epoch.
///
/// Owns a seeder and a core generator and enforces the reseed policy on
/// every output request. Construction performs one reseed, so the source
/// is never observable in an unseeded state. Methods take `&self`; the
/// source is shareable across threads via `Arc` when its capabilities
/// are `Send`.
///
/// # Security Model
///
/// - No single seed epoch ever services more than `reseed_threshold` bytes
/// - Seeder failures are fatal; generation never continues on a stale seed
/// - Caller-supplied seeds via [`set_seed`](Self::set_seed) supplement the
///   generator's state and are orthogonal to the automatic policy
pub struct ReseedingRandomSource<S, G> {
    policy: ReseedPolicy,
    epoch: Mutex<Epoch<S, G>>,
}

impl<S: Seeder, G: CoreGenerator> ReseedingRandomSource<S, G> {
    /// Creates a source and performs the initial reseed.
    ///
    /// Fails if the policy is invalid or the seeder cannot produce seed
    /// material; no partially-initialized source is observable.
    pub fn new(seeder: S, core: G, policy: ReseedPolicy) -> Result<Self, RandomSourceError> {
        policy.validate()?;

        let mut epoch = Epoch {
            seeder,
            core,
            bytes_since_reseed: 0,
            reseed_count: 0,
        };
        reseed(&mut epoch, &policy).map_err(RandomSourceError::Initialization)?;

        Ok(Self {
            policy,
            epoch: Mutex::new(epoch),
        })
    }

    /// Fills `dest` with pseudorandom bytes, reseeding first if the epoch
    /// would otherwise exceed its threshold.
    ///
    /// A request larger than the threshold still triggers exactly one
    /// reseed and is then serviced in full: the policy caps where an
    /// epoch may *start* servicing a request, not individual request
    /// size.
    pub fn next_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        let mut epoch = self.lock();
        let requested = dest.len() as u64;

        if epoch.bytes_since_reseed.saturating_add(requested) > self.policy.reseed_threshold {
            reseed(&mut epoch, &self.policy).map_err(RandomSourceError::Reseed)?;
        }
        epoch.bytes_since_reseed += requested;
        epoch.core.next_bytes(dest);

        tracing::trace!(
            requested,
            bytes_since_reseed = epoch.bytes_since_reseed,
            "serviced random bytes"
        );
        Ok(())
    }

    /// Mixes caller-supplied seed bytes into the core generator.
    ///
    /// Supplements the generator's state per its own seeding semantics.
    /// Does not reset the epoch counter and does not count as a reseed;
    /// it is orthogonal to the automatic policy.
    pub fn set_seed(&self, seed: &[u8]) {
        let mut epoch = self.lock();
        epoch.core.set_seed(seed);
    }

    /// Returns `seed_length` fresh bytes from the seeder.
    ///
    /// The `num_bytes` argument is deliberately ignored; the returned
    /// length is always the policy's `seed_length`. Callers must not
    /// assume the result matches their request.
    pub fn generate_seed(&self, _num_bytes: usize) -> Result<Vec<u8>, RandomSourceError> {
        let mut epoch = self.lock();
        let length = self.policy.seed_length;
        epoch
            .seeder
            .generate_seed(length)
            .map_err(RandomSourceError::Reseed)
    }

    /// Returns bytes serviced in the current seed epoch.
    pub fn bytes_since_reseed(&self) -> u64 {
        self.lock().bytes_since_reseed
    }

    /// Returns the number of reseeds performed, including the initial one.
    pub fn reseed_count(&self) -> u64 {
        self.lock().reseed_count
    }

    /// Returns the reseed policy.
    pub fn policy(&self) -> &ReseedPolicy {
        &self.policy
    }

    fn lock(&self) -> MutexGuard<'_, Epoch<S, G>> {
        self.epoch.lock().expect("failed to get epoch lock")
    }
}

/// Obtains fresh seed material and applies it to the core generator.
///
/// Free function so construction can reseed before the state is wrapped
/// in the lock.
fn reseed<S: Seeder, G: CoreGenerator>(
    epoch: &mut Epoch<S, G>,
    policy: &ReseedPolicy,
) -> Result<(), SeederError> {
    let mut seed = epoch.seeder.generate_seed(policy.seed_length)?;
    if seed.len() != policy.seed_length {
        let got = seed.len();
        seed.zeroize();
        return Err(SeederError::ShortRead {
            requested: policy.seed_length,
            got,
        });
    }

    epoch.core.set_seed(&seed);
    seed.zeroize();

    epoch.bytes_since_reseed = 0;
    epoch.reseed_count += 1;

    tracing::debug!(reseed_count = epoch.reseed_count, "core generator reseeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::MockSeeder;
    use crate::generator::MockGenerator;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn source_with_policy(
        threshold: u64,
        seed_length: usize,
    ) -> (
        ReseedingRandomSource<MockSeeder, MockGenerator>,
        Arc<AtomicU64>,
    ) {
        let seeder = MockSeeder::new();
        let calls = seeder.call_counter();
        let source = ReseedingRandomSource::new(
            seeder,
            MockGenerator::new(),
            ReseedPolicy::new(threshold, seed_length),
        )
        .unwrap();
        (source, calls)
    }

    #[test]
    fn test_construction_reseeds_once() {
        let (source, calls) = source_with_policy(10, 4);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(source.reseed_count(), 1);
        assert_eq!(source.bytes_since_reseed(), 0);
    }

    #[test]
    fn test_no_reseed_within_threshold() {
        let (source, calls) = source_with_policy(100, 4);

        let mut buf = [0u8; 25];
        for _ in 0..4 {
            source.next_bytes(&mut buf).unwrap();
        }

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(source.bytes_since_reseed(), 100);
    }

    #[test]
    fn test_reseed_on_threshold_crossing() {
        let (source, calls) = source_with_policy(10, 4);

        let mut buf = [0u8; 6];
        source.next_bytes(&mut buf).unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(source.bytes_since_reseed(), 6);

        // 6 + 6 > 10: one more seeder call, counter restarts at 6.
        source.next_bytes(&mut buf).unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 2);
        assert_eq!(source.bytes_since_reseed(), 6);
        assert_eq!(source.reseed_count(), 2);
    }

    #[test]
    fn test_exact_threshold_does_not_reseed() {
        let (source, calls) = source_with_policy(10, 4);

        let mut buf = [0u8; 10];
        source.next_bytes(&mut buf).unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(source.bytes_since_reseed(), 10);
    }

    #[test]
    fn test_oversized_request_serviced_in_full() {
        let (source, calls) = source_with_policy(10, 4);

        let mut small = [0u8; 3];
        source.next_bytes(&mut small).unwrap();

        // One reseed, then the whole request from a single epoch.
        let mut big = [0u8; 32];
        source.next_bytes(&mut big).unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 2);
        assert_eq!(source.bytes_since_reseed(), 32);
    }

    #[test]
    fn test_generate_seed_ignores_argument() {
        let (source, _) = source_with_policy(10, 4);
        for request in [0usize, 1, 4, 64] {
            assert_eq!(source.generate_seed(request).unwrap().len(), 4);
        }
    }

    #[test]
    fn test_set_seed_leaves_counter_alone() {
        let (source, calls) = source_with_policy(10, 4);

        let mut buf = [0u8; 6];
        source.next_bytes(&mut buf).unwrap();
        source.set_seed(&[1, 2, 3]);

        assert_eq!(source.bytes_since_reseed(), 6);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(source.reseed_count(), 1);
    }

    #[test]
    fn test_failing_seeder_fails_construction() {
        let result = ReseedingRandomSource::new(
            MockSeeder::failing(),
            MockGenerator::new(),
            ReseedPolicy::new(10, 4),
        );
        assert!(matches!(
            result,
            Err(RandomSourceError::Initialization(_))
        ));
    }

    #[test]
    fn test_reseed_failure_propagates() {
        let seeder = MockSeeder::new().fail_after(1);
        let source = ReseedingRandomSource::new(
            seeder,
            MockGenerator::new(),
            ReseedPolicy::new(10, 4),
        )
        .unwrap();

        let mut buf = [0u8; 8];
        source.next_bytes(&mut buf).unwrap();

        let result = source.next_bytes(&mut buf);
        assert!(matches!(result, Err(RandomSourceError::Reseed(_))));
    }

    #[test]
    fn test_short_seed_read_fails_reseed() {
        struct ShortSeeder;
        impl Seeder for ShortSeeder {
            fn generate_seed(&mut self, length: usize) -> Result<Vec<u8>, SeederError> {
                Ok(vec![0u8; length / 2])
            }
        }

        let result = ReseedingRandomSource::new(
            ShortSeeder,
            MockGenerator::new(),
            ReseedPolicy::new(10, 4),
        );
        assert!(matches!(
            result,
            Err(RandomSourceError::Initialization(SeederError::ShortRead {
                requested: 4,
                got: 2
            }))
        ));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let result = ReseedingRandomSource::new(
            MockSeeder::new(),
            MockGenerator::new(),
            ReseedPolicy::new(0, 4),
        );
        assert!(matches!(
            result,
            Err(RandomSourceError::Policy(PolicyError::InvalidThreshold))
        ));

        let result = ReseedingRandomSource::new(
            MockSeeder::new(),
            MockGenerator::new(),
            ReseedPolicy::new(10, 0),
        );
        assert!(matches!(
            result,
            Err(RandomSourceError::Policy(PolicyError::InvalidSeedLength))
        ));
    }

    #[test]
    fn test_shared_across_threads() {
        let seeder = MockSeeder::new();
        let calls = seeder.call_counter();
        let source = Arc::new(
            ReseedingRandomSource::new(
                seeder,
                MockGenerator::new(),
                ReseedPolicy::new(64, 8),
            )
            .unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || {
                    let mut buf = [0u8; 16];
                    for _ in 0..16 {
                        source.next_bytes(&mut buf).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // 64 requests of 16 bytes against a 64-byte threshold: each epoch
        // services exactly 4 requests regardless of interleaving.
        assert_eq!(calls.load(Ordering::Relaxed), 16);
        assert_eq!(source.reseed_count(), 16);
    }

    proptest! {
        #[test]
        fn prop_seeder_calls_match_policy(
            threshold in 1u64..512,
            seed_length in 1usize..64,
            requests in proptest::collection::vec(0usize..128, 0..64),
        ) {
            let seeder = MockSeeder::new();
            let calls = seeder.call_counter();
            let source = ReseedingRandomSource::new(
                seeder,
                MockGenerator::new(),
                ReseedPolicy::new(threshold, seed_length),
            )
            .unwrap();

            let mut expected_calls = 1u64;
            let mut counter = 0u64;
            for &n in &requests {
                let mut buf = vec![0u8; n];
                source.next_bytes(&mut buf).unwrap();

                if counter + n as u64 > threshold {
                    expected_calls += 1;
                    counter = 0;
                }
                counter += n as u64;

                prop_assert_eq!(source.bytes_since_reseed(), counter);
            }
            prop_assert_eq!(calls.load(Ordering::Relaxed), expected_calls);
        }
    }
}
