//! Workspace error types.

use thiserror::Error;

/// Top-level error type for almanac configuration and parsing.
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// A locale tag did not match the accepted `language[-REGION]` form.
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),

    /// An error-level name was not one of the recognized levels.
    #[error("invalid error level: {0:?} (expected silent, warning or error)")]
    InvalidErrorLevel(String),

    /// A configuration source could not be interpreted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
