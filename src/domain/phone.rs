//! PhoneNumber value object and the number validator.

use super::errors::{message_of, ValidationError};
use super::whitespace::{trim_form, WHITESPACE_CLASS};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default minimum number of digits in a phone number.
pub const DEFAULT_MIN_DIGITS: usize = 3;

/// Default maximum number of digits in a phone number (E.164 limit).
pub const DEFAULT_MAX_DIGITS: usize = 15;

static LETTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Zа-яА-Я]").expect("Failed to compile letter regex"));

// `\d` and `\s` in the regex crate are Unicode-aware, so both are spelled out.
static PHONE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    let sep = format!(r"(?:[-.]|{})", WHITESPACE_CLASS);
    Regex::new(&format!(
        r"^\+?([0-9]{sep}?)+(\(?[0-9]+{sep}?[0-9]+\)?)?({sep}?[0-9]+)+$",
        sep = sep
    ))
    .expect("Failed to compile phone shape regex")
});

/// Digit-count bounds applied after the shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRules {
    /// Fewest digits accepted (inclusive)
    pub min_digits: usize,

    /// Most digits accepted (inclusive)
    pub max_digits: usize,
}

impl Default for NumberRules {
    fn default() -> Self {
        Self {
            min_digits: DEFAULT_MIN_DIGITS,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

impl NumberRules {
    /// Validate a raw phone number against these rules.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. no Latin or Cyrillic letters anywhere in the raw input
    /// 2. the trimmed input has a phone-like shape
    /// 3. at least `min_digits` digits
    /// 4. at most `max_digits` digits
    ///
    /// A number with letters is always reported as a letter error, even when
    /// its shape or length would also fail.
    pub fn validate(&self, raw: &str) -> Result<(), ValidationError> {
        if LETTER_REGEX.is_match(raw) {
            return Err(ValidationError::NumberContainsLetters);
        }

        if !PHONE_SHAPE_REGEX.is_match(trim_form(raw)) {
            return Err(ValidationError::InvalidNumberFormat);
        }

        let digits = count_digits(raw);
        if digits < self.min_digits {
            return Err(ValidationError::NumberTooShort {
                min: self.min_digits,
            });
        }
        if digits > self.max_digits {
            return Err(ValidationError::NumberTooLong {
                max: self.max_digits,
            });
        }

        Ok(())
    }
}

fn count_digits(raw: &str) -> usize {
    raw.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Validate a raw phone number with the default 3..=15 digit bounds.
///
/// # Errors
///
/// See [`NumberRules::validate`].
pub fn validate_number(raw: &str) -> Result<(), ValidationError> {
    NumberRules::default().validate(raw)
}

/// String form of [`validate_number`]: empty when valid, the error message otherwise.
pub fn number_message(raw: &str) -> String {
    message_of(&validate_number(raw))
}

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// The raw formatting is kept as entered.
///
/// # Example
///
/// ```
/// use contacts_form::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.digits_only(), "15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber using the default digit bounds.
    ///
    /// # Errors
    ///
    /// Returns the first failing check from [`NumberRules::validate`].
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_rules(phone, &NumberRules::default())
    }

    /// Create a new PhoneNumber using custom digit bounds.
    pub fn with_rules(
        phone: impl Into<String>,
        rules: &NumberRules,
    ) -> Result<Self, ValidationError> {
        let phone = phone.into();
        rules.validate(&phone)?;
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_common_formats() {
        for number in [
            "+1 (555) 123-4567",
            "123-456-7890",
            "555.123.4567",
            "+14155551234",
            "123",
            "  459-12-56  ",
            "+380 44 123 45 67",
        ] {
            assert_eq!(validate_number(number), Ok(()), "{number:?} should be valid");
        }
    }

    #[test]
    fn test_phone_letters_take_precedence() {
        assert_eq!(
            validate_number("abc123"),
            Err(ValidationError::NumberContainsLetters)
        );
        assert_eq!(
            validate_number("555-CALL-NOW"),
            Err(ValidationError::NumberContainsLetters)
        );
        assert_eq!(
            validate_number("телефон"),
            Err(ValidationError::NumberContainsLetters)
        );
        // Too short and letters: letters win.
        assert_eq!(validate_number("a"), Err(ValidationError::NumberContainsLetters));
    }

    #[test]
    fn test_phone_shape_mismatch() {
        for number in ["!!!", "", "   ", "1", "+", "(555)", "123#456", "1 2 3 +"] {
            assert_eq!(
                validate_number(number),
                Err(ValidationError::InvalidNumberFormat),
                "{number:?} should fail the shape check"
            );
        }
    }

    #[test]
    fn test_phone_unicode_digits_fail_shape() {
        assert_eq!(
            validate_number("١٢٣٤"),
            Err(ValidationError::InvalidNumberFormat)
        );
    }

    #[test]
    fn test_phone_whitespace_follows_browser_rules() {
        assert_eq!(validate_number("123\u{FEFF}456"), Ok(()));
        assert_eq!(validate_number("\u{FEFF}555-1234\u{FEFF}"), Ok(()));
        assert_eq!(validate_number("123\u{00A0}456"), Ok(()));
        assert_eq!(
            validate_number("123\u{0085}456"),
            Err(ValidationError::InvalidNumberFormat)
        );
        assert_eq!(
            validate_number("555-1234\u{0085}"),
            Err(ValidationError::InvalidNumberFormat)
        );
    }

    #[test]
    fn test_phone_too_short() {
        assert_eq!(
            validate_number("12"),
            Err(ValidationError::NumberTooShort { min: 3 })
        );
        assert_eq!(
            number_message("1-2"),
            "Phone number is too short. It should have at least 3 digits."
        );
    }

    #[test]
    fn test_phone_too_long() {
        assert_eq!(
            validate_number(&"1".repeat(16)),
            Err(ValidationError::NumberTooLong { max: 15 })
        );
        assert_eq!(validate_number(&"1".repeat(15)), Ok(()));
    }

    #[test]
    fn test_phone_custom_rules() {
        let rules = NumberRules {
            min_digits: 7,
            max_digits: 10,
        };
        assert_eq!(
            rules.validate("123-45"),
            Err(ValidationError::NumberTooShort { min: 7 })
        );
        assert_eq!(
            rules.validate("+1 (555) 123-4567"),
            Err(ValidationError::NumberTooLong { max: 10 })
        );
        assert!(rules.validate("555-123-4567").is_ok());
    }

    #[test]
    fn test_phone_validation_is_idempotent() {
        for number in ["abc123", "12", "+1 (555) 123-4567", "!!!"] {
            assert_eq!(validate_number(number), validate_number(number));
        }
    }

    #[test]
    fn test_phone_digits_only() {
        let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
        assert_eq!(phone.digits_only(), "15551234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("+1-555-1234").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+1-555-1234\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
