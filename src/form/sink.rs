//! The collaborator that receives newly added contacts.

use crate::models::Contact;

/// Receiver for contacts produced by a successful submission.
///
/// The host application supplies this; the form calls it at most once per
/// submission, synchronously, before clearing its fields.
pub trait ContactSink {
    /// Take ownership of a newly created contact.
    fn add_contact(&mut self, contact: Contact);
}

impl<F> ContactSink for F
where
    F: FnMut(Contact),
{
    fn add_contact(&mut self, contact: Contact) {
        self(contact)
    }
}

impl ContactSink for Vec<Contact> {
    fn add_contact(&mut self, contact: Contact) {
        self.push(contact);
    }
}
