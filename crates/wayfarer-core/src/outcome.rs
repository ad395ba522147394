//! The tagged result of resuming an adventure once.

use std::fmt;

use crate::adventure::Adventure;
use crate::challenge::Challenge;

/// What an adventure reports each time it is resumed.
pub enum Outcome<I, O> {
    /// Nothing changes and nothing is emitted.
    Empty,
    /// Replace the active adventure and re-deliver the same input to it.
    NewAdventure(Box<dyn Adventure<I, O>>),
    /// Replace the challenge gating the next input.
    NewChallenge(Box<dyn Challenge<I>>),
    /// Emit items; the challenge stays as it is. Must not be empty.
    Output(Vec<O>),
    /// Replace the challenge and emit items. The items must not be empty.
    ChallengeAndOutput(Box<dyn Challenge<I>>, Vec<O>),
    /// The adventure is over and must not be resumed again.
    Finished,
}

impl<I, O> Outcome<I, O> {
    /// Hands the dialog off to `adventure`.
    #[must_use]
    pub fn hand_off(adventure: impl Adventure<I, O> + 'static) -> Self {
        Self::NewAdventure(Box::new(adventure))
    }

    /// Gates the next input with `challenge`.
    #[must_use]
    pub fn challenge(challenge: impl Challenge<I> + 'static) -> Self {
        Self::NewChallenge(Box::new(challenge))
    }

    /// Emits `items`.
    #[must_use]
    pub fn output(items: impl IntoIterator<Item = O>) -> Self {
        Self::Output(items.into_iter().collect())
    }

    /// Gates the next input with `challenge` and emits `items`.
    #[must_use]
    pub fn challenge_and_output(
        challenge: impl Challenge<I> + 'static,
        items: impl IntoIterator<Item = O>,
    ) -> Self {
        Self::ChallengeAndOutput(Box::new(challenge), items.into_iter().collect())
    }

    /// Short label of the variant, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NewAdventure(_) => "new_adventure",
            Self::NewChallenge(_) => "new_challenge",
            Self::Output(_) => "output",
            Self::ChallengeAndOutput(..) => "challenge_and_output",
            Self::Finished => "finished",
        }
    }
}

impl<I, O> fmt::Debug for Outcome<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::NewAdventure(adventure) => {
                f.debug_tuple("NewAdventure").field(&adventure.name()).finish()
            }
            Self::NewChallenge(challenge) => {
                f.debug_tuple("NewChallenge").field(&challenge.name()).finish()
            }
            Self::Output(items) => write!(f, "Output({} items)", items.len()),
            Self::ChallengeAndOutput(challenge, items) => write!(
                f,
                "ChallengeAndOutput({:?}, {} items)",
                challenge.name(),
                items.len()
            ),
            Self::Finished => f.write_str("Finished"),
        }
    }
}
