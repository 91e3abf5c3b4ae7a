//! Random-index seam for the few places the engine draws from a fixed list.
//!
//! Randomness is injected rather than ambient so callers can pin a seed and
//! tests can assert exact output.

/// Picks an index into a slice of the given length.
pub trait IndexPicker {
    /// Return an index in `0..len`. `len` is always ≥ 1 at call sites.
    fn pick(&mut self, len: usize) -> usize;
}

/// A picker that always returns the same index (clamped to range).
///
/// Test double; also usable to pin the fallback prompt deterministically.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl IndexPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_picker_clamps() {
        let mut picker = FixedPicker(10);
        assert_eq!(picker.pick(3), 2);
        assert_eq!(picker.pick(20), 10);
    }
}
