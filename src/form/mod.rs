//! Add-contact form state and submission handling.
//!
//! [`ContactsForm`] owns the two field values and the error message shown
//! beneath each of them. Keystrokes replace field values; [`ContactsForm::submit`]
//! validates both fields and either records the errors or emits a [`Contact`]
//! to the supplied [`ContactSink`] and resets the form.

pub mod sink;

pub use sink::ContactSink;

use crate::config::Config;
use crate::domain::{
    ContactName, Field, IdGenerator, NumberRules, PhoneNumber, UuidIdGenerator,
    ValidationError,
};
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Error message per field. An empty string means the field has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub name: String,
    pub number: String,
}

impl FieldErrors {
    /// True when neither field carries a message.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.number.is_empty()
    }

    /// Message for one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Number => &self.number,
        }
    }

    /// Record a failure against the field it belongs to.
    ///
    /// Failures not tied to a form field are ignored.
    pub fn record(&mut self, error: &ValidationError) {
        let slot = match error.field() {
            Some(Field::Name) => &mut self.name,
            Some(Field::Number) => &mut self.number,
            None => return,
        };
        *slot = error.to_string();
    }
}

/// Result of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The contact was handed to the sink and the form was reset.
    /// Carries a copy of what the sink received.
    Added(Contact),

    /// At least one field failed validation; nothing was emitted.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// The added contact, if the submission succeeded.
    pub fn contact(&self) -> Option<&Contact> {
        match self {
            Self::Added(contact) => Some(contact),
            Self::Rejected(_) => None,
        }
    }
}

/// The add-contact form.
#[derive(Debug, Clone)]
pub struct ContactsForm<G = UuidIdGenerator> {
    name: String,
    number: String,
    errors: FieldErrors,
    rules: NumberRules,
    ids: G,
}

impl ContactsForm<UuidIdGenerator> {
    /// Create an empty form with default digit bounds and UUID identifiers.
    pub fn new() -> Self {
        Self::with_generator(UuidIdGenerator)
    }

    /// Create an empty form using the digit bounds from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_rules(config.number_rules())
    }
}

impl Default for ContactsForm<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ContactsForm<G> {
    /// Create an empty form that draws identifiers from `ids`.
    pub fn with_generator(ids: G) -> Self {
        Self {
            name: String::new(),
            number: String::new(),
            errors: FieldErrors::default(),
            rules: NumberRules::default(),
            ids,
        }
    }

    /// Replace the digit bounds used for the number field.
    pub fn with_rules(mut self, rules: NumberRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Error messages from the last rejected submission.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Update the name field. Errors are left as they are until the next submit.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Update the number field. Errors are left as they are until the next submit.
    pub fn set_number(&mut self, value: impl Into<String>) {
        self.number = value.into();
    }

    /// Validate both fields and, if they pass, emit a new contact.
    ///
    /// On failure both messages are stored (an empty one for a field that
    /// passed) and the field values are kept for correction. On success the
    /// contact is passed to `sink` exactly once, then both fields and the
    /// error state are cleared.
    pub fn submit<S>(&mut self, sink: &mut S) -> SubmitOutcome
    where
        S: ContactSink + ?Sized,
    {
        let name = ContactName::new(self.name.as_str());
        let number = PhoneNumber::with_rules(self.number.as_str(), &self.rules);

        let (name, number) = match (name, number) {
            (Ok(name), Ok(number)) => (name, number),
            (name, number) => {
                trace!(
                    name_valid = name.is_ok(),
                    number_valid = number.is_ok(),
                    "Submission rejected"
                );
                let mut errors = FieldErrors::default();
                for error in [name.err(), number.err()].iter().flatten() {
                    errors.record(error);
                }
                self.errors = errors.clone();
                return SubmitOutcome::Rejected(errors);
            }
        };

        let id = self.ids.generate();
        debug!(contact_id = %id, "Adding contact");
        let contact = Contact::new(id, name, number);
        sink.add_contact(contact.clone());

        self.name.clear();
        self.number.clear();
        self.errors = FieldErrors::default();
        SubmitOutcome::Added(contact)
    }
}
