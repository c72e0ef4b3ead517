use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use tracing::{debug, warn};

use crate::domain::ticket::{TicketReceipt, ValidTicket};
use crate::error::SubmitError;
use crate::services::TicketService;

/// Posts tickets to `{base_url}/ticket`.
pub struct HttpTicketClient {
    http: Client,
    base_url: String,
}

impl HttpTicketClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn ticket_endpoint(base_url: &str) -> String {
        format!("{}/ticket", base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TicketService for HttpTicketClient {
    async fn submit(&self, ticket: &ValidTicket) -> Result<TicketReceipt, SubmitError> {
        let endpoint = Self::ticket_endpoint(&self.base_url);
        debug!(%endpoint, subject = %ticket.draft().ticket_subject, "posting ticket");

        let response = self
            .http
            .post(&endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(ticket)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        // Read as text first so a non-JSON error page still yields a clean failure.
        let body = response.text().await.map_err(SubmitError::Transport)?;

        if !status.is_success() {
            warn!(%status, "ticket service rejected submission");
            return Err(SubmitError::Status { status, body });
        }

        let response = serde_json::from_str(&body).map_err(|err| {
            SubmitError::InvalidResponse(format!("expected JSON body: {err}"))
        })?;

        Ok(TicketReceipt { response })
    }
}
