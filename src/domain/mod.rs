//! Domain value objects and validators.
//!
//! This module holds the validation rules for the two form fields
//! (name and phone number) together with type-safe wrappers that can only
//! be constructed from input that passed them.

pub mod contact_id;
pub mod errors;
pub mod name;
pub mod phone;
pub mod whitespace;

pub use contact_id::{ContactId, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use errors::{message_of, Field, ValidationError};
pub use name::{name_message, validate_name, ContactName};
pub use phone::{number_message, validate_number, NumberRules, PhoneNumber};
