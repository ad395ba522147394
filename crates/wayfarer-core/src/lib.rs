//! Wayfarer Core — collaborator abstractions for branching dialogs.
//!
//! This crate defines what a Campaign drives: resumable `Adventure`s, the
//! `Challenge`s that gate their input, and the `Outcome` each resumption
//! produces. It contains no state machine and no infrastructure code.

pub mod adventure;
pub mod challenge;
pub mod clock;
pub mod error;
pub mod outcome;
pub mod rng;
