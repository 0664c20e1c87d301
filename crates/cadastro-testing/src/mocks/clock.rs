//! Fixed clock for deterministic timestamps in tests

use cadastro_ports::Clock;
use chrono::{DateTime, Duration, Utc};
use std::sync::RwLock;

/// A settable clock. Starts at the instant given to [`FixedClock::new`]
/// and only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        FixedClock {
            now: RwLock::new(now),
        }
    }

    /// A fixed clock pinned to the current system time
    pub fn at_system_now() -> Self {
        Self::new(Utc::now())
    }

    /// Move the clock to an absolute instant
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write().unwrap() = now;
    }

    /// Advance the clock by a duration
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}
