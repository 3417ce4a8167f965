//! Pseudo-random source backed by `rand`'s `StdRng`

use crate::rng::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pseudo-random number generator source
pub struct PseudoSource {
    rng: StdRng,
    seed: u64,
}

impl PseudoSource {
    /// Create a source seeded from the current wall-clock time
    ///
    /// The seed has one-second granularity, so two runs started within the
    /// same second draw the same sequence.
    pub fn from_time() -> Self {
        let seed = chrono::Utc::now().timestamp().unsigned_abs();
        Self::seeded(seed)
    }

    /// Create a seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PseudoSource {
    fn name(&self) -> &'static str {
        "pseudo"
    }

    fn description(&self) -> &'static str {
        "Pseudo-random number generator (StdRng)"
    }

    fn float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_floats_in_range() {
        let mut source = PseudoSource::seeded(12345);

        for _ in 0..1000 {
            let f = source.float();
            assert!((0.0..1.0).contains(&f), "Float {} out of range [0, 1)", f);
        }
    }

    #[test]
    fn test_seeded_source_reproducible() {
        let mut source1 = PseudoSource::seeded(42);
        let mut source2 = PseudoSource::seeded(42);

        let draws1: Vec<f64> = (0..100).map(|_| source1.float()).collect();
        let draws2: Vec<f64> = (0..100).map(|_| source2.float()).collect();

        assert_eq!(draws1, draws2);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut source1 = PseudoSource::seeded(1);
        let mut source2 = PseudoSource::seeded(2);

        let draws1: Vec<f64> = (0..10).map(|_| source1.float()).collect();
        let draws2: Vec<f64> = (0..10).map(|_| source2.float()).collect();

        assert_ne!(draws1, draws2);
    }

    #[test]
    fn test_from_time_records_seed() {
        let source = PseudoSource::from_time();
        assert!(source.seed() > 0);
        assert_eq!(source.name(), "pseudo");
    }
}
