//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use almanac_core::clock::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A fixed clock at the given millisecond offset from the Unix epoch.
    ///
    /// # Panics
    ///
    /// Panics if the offset is out of chrono's representable range.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        Self(Utc.timestamp_millis_opt(millis).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by a fixed step on every read.
///
/// Useful for simulating the latency between consecutive reads without
/// sleeping in tests.
#[derive(Debug)]
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    /// A stepping clock starting at the given millisecond offset from the
    /// Unix epoch, advancing `step_millis` per read.
    ///
    /// # Panics
    ///
    /// Panics if the start offset is out of chrono's representable range.
    #[must_use]
    pub fn new(start_millis: i64, step_millis: i64) -> Self {
        Self {
            current: Mutex::new(Utc.timestamp_millis_opt(start_millis).unwrap()),
            step: Duration::milliseconds(step_millis),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let reading = *current;
        *current += self.step;
        reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_always_returns_the_same_instant() {
        let clock = FixedClock::at_millis(1_700_000_000_123);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_stepping_clock_advances_per_read() {
        let clock = SteppingClock::new(1_000, 250);
        assert_eq!(clock.now().timestamp_millis(), 1_000);
        assert_eq!(clock.now().timestamp_millis(), 1_250);
        assert_eq!(clock.now().timestamp_millis(), 1_500);
    }
}
