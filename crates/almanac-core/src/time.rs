//! Epoch timestamp representation.

use crate::clock::Clock;

/// Milliseconds since the Unix epoch (1970-01-01T00:00:00Z).
///
/// Non-negative and monotonic with wall-clock time under a normally
/// configured system clock. Signed so that differences between two readings
/// can be taken directly.
pub type EpochMillis = i64;

/// Reads the given clock as milliseconds since the Unix epoch.
///
/// This is the single conversion point between the chrono representation
/// and the integer timestamps the calendar surfaces expose.
#[must_use]
pub fn epoch_millis(clock: &dyn Clock) -> EpochMillis {
    clock.now().timestamp_millis()
}

/// Reads the given clock as whole seconds since the Unix epoch.
#[must_use]
pub fn epoch_seconds(clock: &dyn Clock) -> i64 {
    clock.now().timestamp()
}
