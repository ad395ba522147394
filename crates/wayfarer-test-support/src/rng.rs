//! Test RNG: a scripted `DeterministicRng` implementation.

use wayfarer_core::rng::DeterministicRng;

/// An RNG that returns values from a predetermined sequence, ignoring the
/// requested range. Used by tests that need a specific secret or roll.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    /// # Panics
    ///
    /// Panics if the sequence is exhausted.
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let value = *self
            .values
            .get(self.index)
            .unwrap_or_else(|| panic!("SequenceRng exhausted after {} values", self.index));
        self.index += 1;
        value
    }
}
