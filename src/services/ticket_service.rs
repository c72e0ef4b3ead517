use async_trait::async_trait;

use crate::domain::ticket::{TicketReceipt, ValidTicket};
use crate::error::SubmitError;

#[async_trait]
pub trait TicketService: Send + Sync {
    async fn submit(&self, ticket: &ValidTicket) -> Result<TicketReceipt, SubmitError>;
}
