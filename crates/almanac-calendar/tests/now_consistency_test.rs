//! End-to-end regression for the calendar current-time accessor.
//!
//! Runs against the live system clock: both surfaces of the calendar clock
//! must agree with each other and with the wall clock.

use almanac_calendar::calendar::{Calendar, get_now};
use almanac_calendar::config::CalendarConfig;
use almanac_calendar::consistency::{NOW_TOLERANCE_MS, NowComparer};

#[test]
fn test_live_now_readings_are_consistent() {
    let calendar = Calendar::new(CalendarConfig::default());

    let report = NowComparer::new().compare(&calendar);

    assert!(
        report.surfaces_agree,
        "object {} ms and function {} ms disagree",
        report.object_now_ms, report.function_now_ms
    );
    assert!(
        report.system_agrees,
        "function {} ms and system {} s disagree",
        report.function_now_ms, report.system_secs
    );
    assert!(report.passed());
}

#[test]
fn test_object_and_function_surfaces_read_the_same_clock() {
    let calendar = Calendar::new(CalendarConfig::default());

    let diff = (calendar.now_millis() - get_now()).abs();

    assert!(diff < NOW_TOLERANCE_MS, "surfaces {diff} ms apart");
}

#[test]
fn test_live_reading_is_past_the_epoch() {
    assert!(get_now() > 0);
}
