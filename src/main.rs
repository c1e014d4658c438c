//! Contacts form - stdio entry point
//!
//! Reads one JSON request per line from stdin, submits it to the add-contact
//! form, and writes one JSON response per line to stdout. Logs go to stderr.

use anyhow::Result;
use contacts_form::server::{run_session, FormSession};
use contacts_form::{Config, ContactsForm};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout carries responses)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Phone digits allowed: {}..={}",
        config.min_phone_digits, config.max_phone_digits
    );

    let mut session = FormSession::new(ContactsForm::from_config(&config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_session(&mut session, stdin.lock(), stdout.lock()) {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    info!("Session complete, {} contact(s) added", session.contacts().len());
    Ok(())
}
