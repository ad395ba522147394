//! Resumable units of dialog logic.

use std::fmt;

use crate::outcome::Outcome;

/// A resumable computation driven one input at a time.
///
/// Suspension state lives in the implementor's fields: every call to
/// [`resume`](Adventure::resume) delivers one input and runs the adventure up
/// to its next suspension point, reporting what happened as an [`Outcome`].
/// The first resumption of a freshly created campaign receives `None`.
pub trait Adventure<I, O> {
    /// Delivers `input` and runs until the next suspension point.
    fn resume(&mut self, input: Option<&I>) -> Outcome<I, O>;

    /// Releases held resources. Called exactly once, when the adventure is
    /// superseded by a hand-off or finishes; it is never resumed afterwards.
    fn dispose(&mut self) {}

    /// Human-readable name used in errors and logs.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// An adventure backed by a closure. See [`from_fn`].
pub struct FnAdventure<F> {
    name: String,
    step: F,
}

/// Wraps a closure as an adventure; any state it needs lives in its captures.
pub fn from_fn<I, O, F>(name: impl Into<String>, step: F) -> FnAdventure<F>
where
    F: FnMut(Option<&I>) -> Outcome<I, O>,
{
    FnAdventure {
        name: name.into(),
        step,
    }
}

impl<F> fmt::Debug for FnAdventure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAdventure")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<I, O, F> Adventure<I, O> for FnAdventure<F>
where
    F: FnMut(Option<&I>) -> Outcome<I, O>,
{
    fn resume(&mut self, input: Option<&I>) -> Outcome<I, O> {
        (self.step)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Strips the module path from a `std::any::type_name` result, keeping any
/// generic arguments intact.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base_end = full.find('<').unwrap_or(full.len());
    let start = full[..base_end].rfind("::").map_or(0, |idx| idx + 2);
    &full[start..]
}
