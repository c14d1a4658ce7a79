//! Shared test clocks for the almanac workspace.

mod clock;

pub use clock::{FixedClock, SteppingClock};
