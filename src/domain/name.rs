//! ContactName value object and the name validator.

use super::errors::{message_of, ValidationError};
use super::whitespace::trim_form;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One or more letters, then letters or spaces each optionally preceded by
/// a single apostrophe, hyphen or space. Letters are ASCII Latin and the
/// basic Cyrillic block only.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Zа-яА-Я]+([' -]?[a-zA-Zа-яА-Я ])*$")
        .expect("Failed to compile name regex")
});

/// Check a raw name against the allowed-character grammar.
///
/// Leading and trailing whitespace is ignored for the check only.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` if the trimmed name is empty or
/// contains anything other than letters, apostrophes, hyphens and spaces in
/// the accepted arrangement.
pub fn validate_name(raw: &str) -> Result<(), ValidationError> {
    if NAME_REGEX.is_match(trim_form(raw)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName)
    }
}

/// String form of [`validate_name`]: empty when valid, the error message otherwise.
pub fn name_message(raw: &str) -> String {
    message_of(&validate_name(raw))
}

/// A contact name that has passed [`validate_name`].
///
/// The value is stored exactly as entered; trimming only applies to the check.
///
/// # Example
///
/// ```
/// use contacts_form::domain::ContactName;
///
/// let name = ContactName::new("Jacob Mercer").unwrap();
/// assert_eq!(name.as_str(), "Jacob Mercer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating the grammar.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
