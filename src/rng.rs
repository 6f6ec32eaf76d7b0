// Randomness for spawning stars.
// One generator per process, seeded once at startup and handed to whoever builds stars.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability the star factory draws from.
pub trait RandomSource {
    /// Uniform float in `[min, max)`. Returns `min` when the range is empty.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    fn uniform_int(&mut self, bound: u32) -> u32;
}

/// Newtype around `StdRng` so the simulation owns exactly one generator.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Reproducible stream: same seed, same starfield.
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (used when no `--seed` is given).
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        let range = min..max;
        if range.is_empty() {
            return min;
        }
        self.0.random_range(range)
    }

    #[inline]
    fn uniform_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.0.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.uniform(-1.0, 1.0), b.uniform(-1.0, 1.0));
            assert_eq!(a.uniform_int(17), b.uniform_int(17));
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let mut r = SeededRandom::from_seed(7);
        for _ in 0..10_000 {
            let f = r.uniform(0.3, 1.0);
            assert!((0.3..1.0).contains(&f));
            assert!(r.uniform_int(100) < 100);
        }
    }

    #[test]
    fn empty_ranges_do_not_panic() {
        let mut r = SeededRandom::from_seed(1);
        assert_eq!(r.uniform(2.0, 2.0), 2.0);
        assert_eq!(r.uniform_int(0), 0);
        assert_eq!(r.uniform_int(1), 0);
    }
}
