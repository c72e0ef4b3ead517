use crate::cmd::fields::TicketFieldArgs;
use crate::domain::validation::validate;
use crate::error::AppResult;
use crate::form::DraftStore;

/// Runs the field checks only; nothing is sent.
pub fn run(fields: &TicketFieldArgs) -> AppResult<()> {
    let store = DraftStore::new();
    fields.apply(&store);
    validate(&store.snapshot())?;
    println!("Ticket is valid.");
    Ok(())
}
