//! Time source adapters.

use crate::domain::entities::Timestamp;
use crate::ports::outbound::TimeSource;

/// Default time source using system time.
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Controllable time source for unit tests.
pub struct FixedTimeSource {
    now: Timestamp,
}

impl FixedTimeSource {
    /// Source that always reports `now`.
    #[must_use]
    pub fn new(now: Timestamp) -> Self {
        Self { now }
    }

    /// Move the reported time for test scenarios.
    pub fn set(&mut self, now: Timestamp) {
        self.now = now;
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.now
    }
}
