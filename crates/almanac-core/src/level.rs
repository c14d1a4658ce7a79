//! Error-reporting levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlmanacError;

/// How the library reports recoverable anomalies, such as a failed
/// consistency check or a clock reading before the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    /// Nothing is reported.
    Silent,
    /// Anomalies are reported as warnings.
    #[default]
    Warning,
    /// Anomalies are reported as errors.
    Error,
}

impl ErrorLevel {
    /// Emits `message` through tracing at this level. `Silent` emits
    /// nothing.
    pub fn report(self, message: &str) {
        match self {
            Self::Silent => {}
            Self::Warning => tracing::warn!("{message}"),
            Self::Error => tracing::error!("{message}"),
        }
    }

    /// Returns the lowercase name of the level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl FromStr for ErrorLevel {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(AlmanacError::InvalidErrorLevel(s.to_owned())),
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_level_names_case_insensitively() {
        assert_eq!("silent".parse::<ErrorLevel>().unwrap(), ErrorLevel::Silent);
        assert_eq!("WARN".parse::<ErrorLevel>().unwrap(), ErrorLevel::Warning);
        assert_eq!("Error".parse::<ErrorLevel>().unwrap(), ErrorLevel::Error);
    }

    #[test]
    fn test_rejects_unknown_level() {
        let err = "loud".parse::<ErrorLevel>().unwrap_err();
        assert!(matches!(err, AlmanacError::InvalidErrorLevel(_)));
    }

    #[test]
    fn test_default_is_warning() {
        assert_eq!(ErrorLevel::default(), ErrorLevel::Warning);
    }

    #[test]
    fn test_display_matches_parse() {
        for level in [ErrorLevel::Silent, ErrorLevel::Warning, ErrorLevel::Error] {
            assert_eq!(level.to_string().parse::<ErrorLevel>().unwrap(), level);
        }
    }
}
