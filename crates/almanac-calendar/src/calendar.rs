//! The calendar current-time surfaces.
//!
//! The same millisecond clock is exposed twice: object style as
//! [`Calendar::now_millis`] and function style as [`get_now`]. Both reduce
//! to one [`Clock`] read.

use std::fmt;
use std::sync::Arc;

use almanac_core::clock::{Clock, SystemClock};
use almanac_core::level::ErrorLevel;
use almanac_core::locale::Locale;
use almanac_core::time::{EpochMillis, epoch_millis};

use crate::config::CalendarConfig;

/// An internationalized calendar configured for one locale.
///
/// Only the current-time surface is modeled here. The locale selects
/// formatting conventions elsewhere; the time reading itself is locale
/// independent.
pub struct Calendar {
    config: CalendarConfig,
    clock: Arc<dyn Clock>,
}

impl Calendar {
    /// Creates a calendar over the system clock.
    #[must_use]
    pub fn new(config: CalendarConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a calendar over an explicit clock.
    #[must_use]
    pub fn with_clock(config: CalendarConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Object-style surface: the current time in milliseconds since the
    /// Unix epoch.
    ///
    /// A reading before the epoch is returned as-is and reported at the
    /// configured error level.
    #[must_use]
    pub fn now_millis(&self) -> EpochMillis {
        let millis = epoch_millis(self.clock.as_ref());
        if millis < 0 {
            self.config
                .error_level
                .report(&format!("calendar clock reads before the epoch: {millis} ms"));
        }
        millis
    }

    /// Returns the configured locale.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.config.locale
    }

    /// Returns the configured error-reporting level.
    #[must_use]
    pub fn error_level(&self) -> ErrorLevel {
        self.config.error_level
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Function-style surface: the current time in milliseconds since the Unix
/// epoch, read from the system clock.
#[must_use]
pub fn get_now() -> EpochMillis {
    get_now_with(&SystemClock)
}

/// Function-style surface over an explicit clock.
#[must_use]
pub fn get_now_with(clock: &dyn Clock) -> EpochMillis {
    epoch_millis(clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_test_support::FixedClock;

    #[test]
    fn test_object_surface_reads_the_injected_clock() {
        let clock = Arc::new(FixedClock::at_millis(1_700_000_000_123));
        let calendar = Calendar::with_clock(CalendarConfig::default(), clock);
        assert_eq!(calendar.now_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_function_surface_reads_the_given_clock() {
        let clock = FixedClock::at_millis(1_700_000_000_456);
        assert_eq!(get_now_with(&clock), 1_700_000_000_456);
    }

    #[test]
    fn test_reading_is_locale_independent() {
        let clock = Arc::new(FixedClock::at_millis(1_700_000_000_123));
        let dutch = Calendar::with_clock(CalendarConfig::default(), clock.clone());
        let english = Calendar::with_clock(
            CalendarConfig {
                locale: "en".parse().unwrap(),
                ..CalendarConfig::default()
            },
            clock,
        );
        assert_eq!(dutch.now_millis(), english.now_millis());
    }

    #[test]
    fn test_pre_epoch_reading_is_returned_unchanged() {
        let clock = Arc::new(FixedClock::at_millis(-1_000));
        let calendar = Calendar::with_clock(CalendarConfig::default(), clock);
        assert_eq!(calendar.now_millis(), -1_000);
    }
}
