//! Data models for the add-contact form.

pub mod contact;

pub use contact::Contact;
