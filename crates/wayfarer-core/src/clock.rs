//! Clock abstraction for determinism.

use chrono::{DateTime, Utc};

/// Abstraction over system time. Campaigns read it to stamp each advance
/// attempt, so tests can inject a deterministic implementation.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
