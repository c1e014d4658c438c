use contacts_form::{Contact, ContactSink};
use std::cell::RefCell;
use std::rc::Rc;

/// Contact sink for testing.
///
/// Records every contact it receives; clones share the same record so a test
/// can hand one clone to the form and inspect another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingSink {
    received: Rc<RefCell<Vec<Contact>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `add_contact` was called.
    pub fn call_count(&self) -> usize {
        self.received.borrow().len()
    }

    /// Contacts received so far, oldest first.
    pub fn received(&self) -> Vec<Contact> {
        self.received.borrow().clone()
    }
}

impl ContactSink for RecordingSink {
    fn add_contact(&mut self, contact: Contact) {
        self.received.borrow_mut().push(contact);
    }
}
