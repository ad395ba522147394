//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{DateTime, Duration, Utc};
use wayfarer_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that moves forward by one second on every reading, starting at
/// `start`. Lets tests tell successive timestamps apart.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI32,
}

impl SteppingClock {
    /// Create a clock whose first reading is `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            ticks: AtomicI32::new(0),
        }
    }

    /// Number of times the clock has been read.
    #[must_use]
    pub fn readings(&self) -> i32 {
        self.ticks.load(Ordering::SeqCst)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(i64::from(tick))
    }
}
