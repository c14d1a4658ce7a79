//! Consistency checking between the calendar's time surfaces.

use almanac_core::clock::{Clock, SystemClock};
use almanac_core::time::{EpochMillis, epoch_seconds};
use serde::Serialize;

use crate::calendar::{Calendar, get_now_with};

/// Maximum distance, in milliseconds, two readings of the same instant may
/// be apart and still count as consistent. Comparisons are strict, so a
/// distance of exactly this value fails. The window absorbs the latency
/// between consecutive clock reads and the rounding lost when scaling whole
/// seconds to milliseconds.
pub const NOW_TOLERANCE_MS: i64 = 2_000;

/// The outcome of one now-consistency comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NowReport {
    /// Object-style reading, milliseconds since the epoch.
    pub object_now_ms: EpochMillis,
    /// Function-style reading, milliseconds since the epoch.
    pub function_now_ms: EpochMillis,
    /// System wall-clock reading, whole seconds since the epoch.
    pub system_secs: i64,
    /// Whether the two API surfaces agree within tolerance.
    pub surfaces_agree: bool,
    /// Whether the function-style reading agrees with the system wall
    /// clock within tolerance.
    pub system_agrees: bool,
}

impl NowReport {
    /// Whether both assertions hold.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.surfaces_agree && self.system_agrees
    }
}

/// Compares the calendar's two current-time surfaces against each other
/// and against the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct NowComparer;

impl NowComparer {
    /// Creates a comparer with the fixed [`NOW_TOLERANCE_MS`] window.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Runs the comparison over the live clocks.
    #[must_use]
    pub fn compare(&self, calendar: &Calendar) -> NowReport {
        self.compare_with(calendar, &SystemClock, &SystemClock)
    }

    /// Runs the comparison with explicit function-surface and system
    /// clocks. The object-style reading always comes from the calendar's
    /// own clock.
    #[must_use]
    pub fn compare_with(
        &self,
        calendar: &Calendar,
        function_clock: &dyn Clock,
        system_clock: &dyn Clock,
    ) -> NowReport {
        let object_now_ms = calendar.now_millis();
        let function_now_ms = get_now_with(function_clock);
        let system_secs = epoch_seconds(system_clock);

        let surfaces_agree = (object_now_ms - function_now_ms).abs() < NOW_TOLERANCE_MS;
        let system_agrees = (system_secs * 1_000 - function_now_ms).abs() < NOW_TOLERANCE_MS;

        tracing::debug!(
            object_now_ms,
            function_now_ms,
            system_secs,
            "compared calendar now readings"
        );
        if !surfaces_agree {
            calendar.error_level().report(&format!(
                "calendar now surfaces disagree: object {object_now_ms} ms, function {function_now_ms} ms"
            ));
        }
        if !system_agrees {
            calendar.error_level().report(&format!(
                "calendar now disagrees with the system clock: function {function_now_ms} ms, system {system_secs} s"
            ));
        }

        NowReport {
            object_now_ms,
            function_now_ms,
            system_secs,
            surfaces_agree,
            system_agrees,
        }
    }
}
