//! Random number generator abstraction for determinism.
//!
//! Dialogs that need randomness draw from this trait instead of a global
//! generator, so tests and replays can inject a seeded or scripted one.

/// Abstraction over random number generation.
pub trait DeterministicRng: Send {
    /// Returns a value in the inclusive range `min..=max`.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}
