//! Contact record produced by a successful form submission.

use crate::domain::{ContactId, ContactName, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A contact emitted by the add-contact form.
///
/// `name` and `number` hold the field values exactly as the user entered them,
/// wrapped in their validated types.
/// Contacts are only built by [`ContactsForm::submit`](crate::form::ContactsForm::submit)
/// after both fields validate, and are handed off by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: ContactId,

    /// Name as entered
    pub name: ContactName,

    /// Phone number as entered
    pub number: PhoneNumber,
}

impl Contact {
    pub(crate) fn new(id: ContactId, name: ContactName, number: PhoneNumber) -> Self {
        Self { id, name, number }
    }
}
