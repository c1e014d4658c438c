//! Request handling for the stdio session.

use crate::domain::{IdGenerator, UuidIdGenerator};
use crate::form::{ContactsForm, FieldErrors, SubmitOutcome};
use crate::models::Contact;
use serde::{Deserialize, Serialize};

/// One submission: the field values at the moment the user pressed submit.
///
/// A missing field is treated as an empty input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormRequest {
    pub name: String,
    pub number: String,
}

/// Reply to a single request line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormResponse {
    /// The contact was accepted.
    Added { contact: Contact },

    /// Validation failed; messages are per field, empty when that field passed.
    Rejected { errors: FieldErrors },

    /// The request could not be read.
    Error { message: String },
}

/// A form together with the contact list it adds to.
#[derive(Debug)]
pub struct FormSession<G = UuidIdGenerator> {
    form: ContactsForm<G>,
    contacts: Vec<Contact>,
}

impl<G: IdGenerator> FormSession<G> {
    pub fn new(form: ContactsForm<G>) -> Self {
        Self {
            form,
            contacts: Vec::new(),
        }
    }

    /// Apply the request's field values and submit.
    pub fn handle(&mut self, request: FormRequest) -> FormResponse {
        self.form.set_name(request.name);
        self.form.set_number(request.number);

        match self.form.submit(&mut self.contacts) {
            SubmitOutcome::Added(contact) => FormResponse::Added { contact },
            SubmitOutcome::Rejected(errors) => FormResponse::Rejected { errors },
        }
    }

    /// Contacts added so far, oldest first.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SequentialIdGenerator;

    fn session() -> FormSession<SequentialIdGenerator> {
        FormSession::new(ContactsForm::with_generator(SequentialIdGenerator::new(
            "c",
        )))
    }

    #[test]
    fn test_handle_added() {
        let mut session = session();
        let response = session.handle(FormRequest {
            name: "Jacob Mercer".to_string(),
            number: "+1 (555) 123-4567".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "added");
        assert_eq!(json["contact"]["id"], "c-1");
        assert_eq!(json["contact"]["name"], "Jacob Mercer");
        assert_eq!(session.contacts().len(), 1);
    }

    #[test]
    fn test_handle_rejected() {
        let mut session = session();
        let response = session.handle(FormRequest {
            name: "Adrian".to_string(),
            number: "!!!".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["errors"]["name"], "");
        assert_eq!(
            json["errors"]["number"],
            "Phone number must be digits and can contain spaces, dashes, parentheses and can start with +"
        );
        assert!(session.into_contacts().is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: FormRequest = serde_json::from_str(r#"{"name":"Adrian"}"#).unwrap();
        assert_eq!(request.number, "");

        let mut session = session();
        assert!(matches!(
            session.handle(request),
            FormResponse::Rejected { .. }
        ));
    }
}
