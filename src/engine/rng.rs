//! Deterministic random sequence generation.
//!
//! Wraps PCG (Permuted Congruential Generator) so that a seed fully
//! determines every sequence handed out across resets.

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Seeded generator of bounded integer sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceRng {
    /// Seed the generator was created from.
    seed: u64,
    /// Number of sequences drawn so far.
    draws: u64,
    rng: Pcg64,
}

impl SequenceRng {
    /// Create a generator from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: 0,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of sequences generated so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate `count` values drawn uniformly from `[min, max]`.
    ///
    /// Reversed bounds are swapped rather than rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepsort::engine::rng::SequenceRng;
    ///
    /// let mut rng = SequenceRng::new(42);
    /// let values = rng.generate(50, 0, 100);
    /// assert_eq!(values.len(), 50);
    /// assert!(values.iter().all(|v| (0..=100).contains(v)));
    /// ```
    pub fn generate(&mut self, count: usize, min: i64, max: i64) -> Vec<i64> {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.draws += 1;
        (0..count).map(|_| self.rng.gen_range(lo..=hi)).collect()
    }

    /// Restart the stream from the original seed.
    pub fn rewind(&mut self) {
        *self = Self::new(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut rng1 = SequenceRng::new(42);
        let mut rng2 = SequenceRng::new(42);
        assert_eq!(rng1.generate(100, 0, 100), rng2.generate(100, 0, 100));
        assert_eq!(rng1.generate(10, -5, 5), rng2.generate(10, -5, 5));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SequenceRng::new(42);
        let mut rng2 = SequenceRng::new(43);
        assert_ne!(
            rng1.generate(100, 0, 1000),
            rng2.generate(100, 0, 1000),
            "Different seeds must produce different sequences"
        );
    }

    #[test]
    fn test_successive_draws_differ() {
        let mut rng = SequenceRng::new(7);
        let first = rng.generate(50, 0, 100);
        let second = rng.generate(50, 0, 100);
        assert_ne!(first, second);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let mut rng = SequenceRng::new(1);
        let values = rng.generate(200, 10, -10);
        assert!(values.iter().all(|v| (-10..=10).contains(v)));
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = SequenceRng::new(1);
        assert_eq!(rng.generate(5, 3, 3), vec![3; 5]);
        assert!(rng.generate(0, 0, 100).is_empty());
    }

    #[test]
    fn test_rewind_restarts_stream() {
        let mut rng = SequenceRng::new(99);
        let first = rng.generate(20, 0, 50);
        rng.generate(20, 0, 50);
        rng.rewind();
        assert_eq!(rng.draws(), 0);
        assert_eq!(rng.generate(20, 0, 50), first);
    }

    #[test]
    fn test_seed_accessor() {
        let rng = SequenceRng::new(1234);
        assert_eq!(rng.seed(), 1234);
    }
}
