//! Test challenges — mock `Challenge` implementations for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wayfarer_core::challenge::Challenge;

/// A challenge that rejects every input, including no input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

impl<I> Challenge<I> for RejectAll {
    fn filter(&self, _input: Option<&I>) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "reject-all"
    }
}

/// A challenge that accepts everything and counts how often it was consulted.
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct CountingChallenge {
    calls: Arc<AtomicUsize>,
}

impl CountingChallenge {
    /// Create a challenge whose counter starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `filter` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<I> Challenge<I> for CountingChallenge {
    fn filter(&self, _input: Option<&I>) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubles_report_fixed_names() {
        let counting = CountingChallenge::new();

        assert_eq!(Challenge::<String>::name(&RejectAll), "reject-all");
        assert!(!Challenge::<String>::filter(&RejectAll, None));
        assert_eq!(Challenge::<String>::name(&counting), "counting");
        assert!(counting.filter(Some(&"x".to_owned())));
        assert_eq!(counting.calls(), 1);
    }
}
