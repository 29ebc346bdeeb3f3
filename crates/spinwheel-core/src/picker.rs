//! Random segment selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses the segment a spin lands on.
pub trait SegmentPicker {
    /// Pick an index in `[0, count)`; `count` is at least one.
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform picker backed by [`StdRng`].
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible picker.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SegmentPicker for RandomPicker {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count.max(1))
    }
}

impl<F> SegmentPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, count: usize) -> usize {
        self(count)
    }
}
