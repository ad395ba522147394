//! Shared test doubles and utilities for Wayfarer dialogs.

mod adventure;
mod challenge;
mod clock;
mod rng;

pub use adventure::{AdventureRecorder, ScriptedAdventure};
pub use challenge::{CountingChallenge, RejectAll};
pub use clock::{FixedClock, SteppingClock};
pub use rng::SequenceRng;
