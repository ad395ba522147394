//! Production RNG backing the built-in dialogs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfarer_core::rng::DeterministicRng;

/// `DeterministicRng` backed by a `StdRng` seeded from the operating system.
#[derive(Debug)]
pub struct OsSeededRng(StdRng);

impl OsSeededRng {
    #[must_use]
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for OsSeededRng {
    fn default() -> Self {
        Self::new()
    }
}

impl DeterministicRng for OsSeededRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}
