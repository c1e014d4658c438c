//! Contacts Form - the core of an add-contact form.
//!
//! A contact is a name and a phone number. Both are checked by small,
//! pure validators before the form hands a new [`Contact`] to its host.
//!
//! # Architecture
//!
//! - **domain**: Name and phone number validators, value objects, contact IDs
//! - **models**: The `Contact` record
//! - **form**: Form state and the submission handler
//! - **config**: Configuration from environment variables
//! - **error**: Error types
//! - **server**: Line-oriented JSON session over stdio
//!
//! # Example
//!
//! ```
//! use contacts_form::ContactsForm;
//! use contacts_form::models::Contact;
//!
//! let mut form = ContactsForm::new();
//! form.set_name("Jacob Mercer");
//! form.set_number("+1 (555) 123-4567");
//!
//! let mut contacts: Vec<Contact> = Vec::new();
//! assert!(form.submit(&mut contacts).is_added());
//! assert_eq!(contacts[0].name.as_str(), "Jacob Mercer");
//! assert_eq!(form.name(), "");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod server;

pub use config::Config;
pub use domain::{
    name_message, number_message, validate_name, validate_number, ContactId, ContactName,
    Field, IdGenerator, NumberRules, PhoneNumber, ValidationError,
};
pub use error::{ConfigError, SessionError};
pub use form::{ContactSink, ContactsForm, FieldErrors, SubmitOutcome};
pub use models::Contact;
