//! Almanac Core — shared abstractions.
//!
//! This crate defines the clock seam, the epoch-millisecond timestamp type,
//! and the locale/error-level configuration values that the calendar crate
//! builds on. It contains no calendar logic.

pub mod clock;
pub mod error;
pub mod level;
pub mod locale;
pub mod time;
