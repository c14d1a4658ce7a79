//! Locale tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlmanacError;

/// A validated locale tag of the form `language[-REGION]`, e.g. `nl` or
/// `nl-NL`.
///
/// The tag is normalized on construction: lowercase language subtag,
/// uppercase region subtag. An underscore separator (`nl_NL`) is accepted
/// on input and normalized to a hyphen.
///
/// Locales only select formatting conventions elsewhere in the library;
/// the current-time reading is the same for every locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parses and normalizes a locale tag.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidLocale` if the tag is not a two- or
    /// three-letter language subtag, optionally followed by a two-letter
    /// region subtag.
    pub fn new(tag: &str) -> Result<Self, AlmanacError> {
        let invalid = || AlmanacError::InvalidLocale(tag.to_owned());

        let mut parts = tag.splitn(2, ['-', '_']);
        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len())
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut normalized = language.to_ascii_lowercase();
        if let Some(region) = parts.next() {
            if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(invalid());
            }
            normalized.push('-');
            normalized.push_str(&region.to_ascii_uppercase());
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl Default for Locale {
    /// Dutch, the default locale the calendar ships configured with.
    fn default() -> Self {
        Self("nl".to_owned())
    }
}

impl FromStr for Locale {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Locale {
    type Error = AlmanacError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}
