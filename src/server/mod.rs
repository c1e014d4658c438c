//! Line-oriented JSON front end for the form.
//!
//! Each input line is a request carrying the current field values; the session
//! applies them to a single [`ContactsForm`](crate::form::ContactsForm), submits,
//! and writes one response line.

pub mod handlers;

pub use handlers::{FormRequest, FormResponse, FormSession};

use crate::domain::IdGenerator;
use crate::error::{SessionError, SessionResult};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Serve requests from `input` until end of stream, writing responses to `output`.
///
/// Blank lines are skipped. Malformed lines, including ones that are not
/// UTF-8, produce an error response and do not end the session.
pub fn run_session<G, R, W>(
    session: &mut FormSession<G>,
    mut input: R,
    mut output: W,
) -> SessionResult<()>
where
    G: IdGenerator,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match serde_json::from_str::<FormRequest>(line) {
                Ok(request) => session.handle(request),
                Err(e) => {
                    warn!("Skipping malformed request line");
                    FormResponse::Error {
                        message: SessionError::from(e).to_string(),
                    }
                }
            },
            Err(e) => {
                warn!("Skipping request line that is not UTF-8");
                FormResponse::Error {
                    message: SessionError::from(e).to_string(),
                }
            }
        };

        serde_json::to_writer(&mut output, &response).map_err(std::io::Error::from)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }

    debug!(
        contacts = session.contacts().len(),
        "Input closed, ending session"
    );
    Ok(())
}
