//! Calendar configuration.

use std::env;

use almanac_core::error::AlmanacError;
use almanac_core::level::ErrorLevel;
use almanac_core::locale::Locale;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the calendar locale tag.
pub const ENV_LOCALE: &str = "ALMANAC_LOCALE";

/// Environment variable overriding the error-reporting level.
pub const ENV_ERROR_LEVEL: &str = "ALMANAC_ERROR_LEVEL";

/// Process-level calendar settings.
///
/// Defaults to locale `nl` at `warning` level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Locale the calendar is configured for.
    pub locale: Locale,
    /// How recoverable anomalies are reported.
    pub error_level: ErrorLevel,
}

impl CalendarConfig {
    /// Reads configuration from the environment, keeping the default for
    /// any variable that is unset.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidLocale` or
    /// `AlmanacError::InvalidErrorLevel` if a variable is set to a value
    /// that does not parse.
    pub fn from_env() -> Result<Self, AlmanacError> {
        let mut config = Self::default();
        if let Ok(tag) = env::var(ENV_LOCALE) {
            config.locale = tag.parse()?;
        }
        if let Ok(level) = env::var(ENV_ERROR_LEVEL) {
            config.error_level = level.parse()?;
        }
        Ok(config)
    }
}
