//! Domain validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message shown when a name fails the allowed-character grammar.
pub const NAME_MESSAGE: &str = "Name may contain only letters, apostrophe, dash and spaces. \
For example Adrian, Jacob Mercer, Charles de Batz de Castelmore d`Artagnan";

/// A user-correctable input failure.
///
/// The `Display` output is the exact message shown beneath the offending field,
/// so the text doubles as the contract with the presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name contains characters outside letters, apostrophe, dash and space.
    #[error("{}", NAME_MESSAGE)]
    InvalidName,

    /// The phone number contains a Latin or Cyrillic letter.
    #[error("Phone number cannot contain letters.")]
    NumberContainsLetters,

    /// The phone number does not have a recognizable shape.
    #[error(
        "Phone number must be digits and can contain spaces, dashes, parentheses and can start with +"
    )]
    InvalidNumberFormat,

    /// The phone number has fewer digits than allowed.
    #[error("Phone number is too short. It should have at least {min} digits.")]
    NumberTooShort { min: usize },

    /// The phone number has more digits than allowed.
    #[error("Phone number is too long. It should not exceed {max} digits.")]
    NumberTooLong { max: usize },

    /// The provided ID is empty.
    #[error("ID cannot be empty")]
    EmptyId,
}

impl ValidationError {
    /// The form field this failure is reported against, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidName => Some(Field::Name),
            Self::NumberContainsLetters
            | Self::InvalidNumberFormat
            | Self::NumberTooShort { .. }
            | Self::NumberTooLong { .. } => Some(Field::Number),
            Self::EmptyId => None,
        }
    }
}

/// Collapse a validation result into the form's string contract:
/// empty for valid input, the error message otherwise.
pub fn message_of(result: &Result<(), ValidationError>) -> String {
    match result {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// The two user-editable fields of the add-contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Number,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Number => write!(f, "number"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_messages_render_bounds() {
        assert_eq!(
            ValidationError::NumberTooShort { min: 3 }.to_string(),
            "Phone number is too short. It should have at least 3 digits."
        );
        assert_eq!(
            ValidationError::NumberTooLong { max: 15 }.to_string(),
            "Phone number is too long. It should not exceed 15 digits."
        );
    }

    #[test]
    fn test_name_message_names_allowed_characters() {
        let msg = ValidationError::InvalidName.to_string();
        assert!(msg.starts_with("Name may contain only letters, apostrophe, dash and spaces."));
        assert!(msg.contains("Jacob Mercer"));
    }

    #[test]
    fn test_field_of_error() {
        assert_eq!(ValidationError::InvalidName.field(), Some(Field::Name));
        assert_eq!(
            ValidationError::NumberTooLong { max: 15 }.field(),
            Some(Field::Number)
        );
        assert_eq!(ValidationError::EmptyId.field(), None);
    }

    #[test]
    fn test_message_of() {
        assert_eq!(message_of(&Ok(())), "");
        assert_eq!(
            message_of(&Err(ValidationError::NumberContainsLetters)),
            "Phone number cannot contain letters."
        );
    }
}
