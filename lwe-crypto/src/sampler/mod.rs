//! # Sampler Module
//!
//! Uniform index/value draws used to fill vector A and to pick the subset of
//! equations combined for every encrypted bit.
//!
//! Neither implementation is cryptographically secure. Callers that need a
//! different source implement [`Sampler`] themselves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integers in `[0, bound)`.
pub trait Sampler {
    /// Draws `count` values uniformly from `[0, bound)`. Values may repeat.
    ///
    /// `bound` must be at least 1. Key material guarantees this for every
    /// call made by this crate.
    fn sample(&mut self, bound: u64, count: usize) -> Vec<u64>;
}

/// Samples from the thread-local generator returned by [`rand::rng`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSampler;

impl Sampler for ThreadSampler {
    fn sample(&mut self, bound: u64, count: usize) -> Vec<u64> {
        let mut rng = rand::rng();
        (0..count).map(|_| rng.random_range(0..bound)).collect()
    }
}

/// Deterministic sampler, repeatable for a given seed.
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for SeededSampler {
    fn sample(&mut self, bound: u64, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.rng.random_range(0..bound)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn prop_thread_sampler_stays_in_bounds(bound: u16, count: u8) -> bool {
        let bound = bound as u64 + 1;
        let values = ThreadSampler.sample(bound, count as usize);

        values.len() == count as usize && values.iter().all(|&v| v < bound)
    }

    #[test]
    fn test_seeded_sampler_is_repeatable() {
        let first = SeededSampler::new(12345).sample(97, 32);
        let second = SeededSampler::new(12345).sample(97, 32);
        assert_eq!(first, second);
        assert!(first.iter().all(|&v| v < 97));
    }

    #[test]
    fn test_zero_count_yields_nothing() {
        assert!(SeededSampler::new(1).sample(13, 0).is_empty());
    }

    #[test]
    fn test_bound_of_one_only_yields_zero() {
        assert!(ThreadSampler.sample(1, 16).iter().all(|&v| v == 0));
    }
}
