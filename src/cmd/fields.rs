use std::io::{BufRead, Write};

use clap::Args;

use crate::domain::ticket::TicketField;
use crate::error::AppResult;
use crate::form::DraftStore;

/// Ticket fields that can be given up front instead of being prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct TicketFieldArgs {
    /// Full name (letters and spaces).
    #[arg(long)]
    pub name: Option<String>,
    /// Email address.
    #[arg(long)]
    pub email: Option<String>,
    /// Mobile number, e.g. 01012345678 or +201012345678.
    #[arg(long)]
    pub phone: Option<String>,
    /// Short subject (letters, spaces and apostrophes).
    #[arg(long)]
    pub subject: Option<String>,
    /// Description of the issue.
    #[arg(long)]
    pub message: Option<String>,
}

impl TicketFieldArgs {
    pub fn value(&self, field: TicketField) -> Option<&str> {
        match field {
            TicketField::ClientName => self.name.as_deref(),
            TicketField::ClientEmail => self.email.as_deref(),
            TicketField::ClientNumber => self.phone.as_deref(),
            TicketField::TicketSubject => self.subject.as_deref(),
            TicketField::TicketMessage => self.message.as_deref(),
        }
    }

    pub fn apply(&self, store: &DraftStore) {
        for field in TicketField::ALL {
            if let Some(value) = self.value(field) {
                store.set(field, value);
            }
        }
    }
}

/// Asks for one field. Enter keeps the current value.
///
/// Returns `false` when input has ended, so callers stop prompting.
pub fn prompt_field(
    input: &mut impl BufRead,
    output: &mut impl Write,
    store: &DraftStore,
    field: TicketField,
) -> AppResult<bool> {
    let current = store.get(field);

    if current.is_empty() {
        write!(output, "{}: ", field.label())?;
    } else {
        write!(output, "{} [{current}]: ", field.label())?;
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    let value = line.trim_end_matches(['\r', '\n']);

    if !value.is_empty() {
        store.set(field, value);
    }
    Ok(true)
}
