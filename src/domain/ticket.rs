use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketField {
    ClientName,
    ClientEmail,
    ClientNumber,
    TicketSubject,
    TicketMessage,
}

impl TicketField {
    pub const ALL: [TicketField; 5] = [
        TicketField::ClientName,
        TicketField::ClientEmail,
        TicketField::ClientNumber,
        TicketField::TicketSubject,
        TicketField::TicketMessage,
    ];

    /// Key used for the field in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketField::ClientName => "clientName",
            TicketField::ClientEmail => "clientEmail",
            TicketField::ClientNumber => "clientNumber",
            TicketField::TicketSubject => "ticketSubject",
            TicketField::TicketMessage => "ticketMessage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketField::ClientName => "Full Name",
            TicketField::ClientEmail => "Email Address",
            TicketField::ClientNumber => "Phone Number",
            TicketField::TicketSubject => "Subject",
            TicketField::TicketMessage => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub client_name: String,
    pub client_email: String,
    pub client_number: String,
    pub ticket_subject: String,
    pub ticket_message: String,
}

impl TicketDraft {
    pub fn get(&self, field: TicketField) -> &str {
        match field {
            TicketField::ClientName => &self.client_name,
            TicketField::ClientEmail => &self.client_email,
            TicketField::ClientNumber => &self.client_number,
            TicketField::TicketSubject => &self.ticket_subject,
            TicketField::TicketMessage => &self.ticket_message,
        }
    }

    pub fn slot_mut(&mut self, field: TicketField) -> &mut String {
        match field {
            TicketField::ClientName => &mut self.client_name,
            TicketField::ClientEmail => &mut self.client_email,
            TicketField::ClientNumber => &mut self.client_number,
            TicketField::TicketSubject => &mut self.ticket_subject,
            TicketField::TicketMessage => &mut self.ticket_message,
        }
    }

    pub fn is_empty(&self) -> bool {
        TicketField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}

/// A draft that passed every field check. Only `validation::validate`
/// builds one, so the submitter never sees an unchecked draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidTicket(TicketDraft);

impl ValidTicket {
    pub(crate) fn new_unchecked(draft: TicketDraft) -> Self {
        Self(draft)
    }

    pub fn draft(&self) -> &TicketDraft {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct TicketReceipt {
    pub response: serde_json::Value,
}
