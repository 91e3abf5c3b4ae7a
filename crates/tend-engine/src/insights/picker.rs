//! Seedable picker backing the generic prompt fallback.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tend_core::traits::IndexPicker;

/// Deterministic picker over a seeded PRNG.
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from entropy, for production callers.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededPicker::from_seed(7);
        let mut b = SeededPicker::from_seed(7);
        for _ in 0..10 {
            assert_eq!(a.pick(5), b.pick(5));
        }
    }

    #[test]
    fn test_in_range() {
        let mut picker = SeededPicker::from_seed(1);
        for _ in 0..100 {
            assert!(picker.pick(3) < 3);
        }
    }
}
