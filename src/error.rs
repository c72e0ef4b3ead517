use std::io;

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::ticket::TicketField;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// A draft that broke one of the field rules. The `Display` text is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    EmptyField(TicketField),
    #[error("Please enter a valid name.")]
    InvalidName,
    #[error("Please enter a valid email: name@example.com")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please enter a valid subject")]
    InvalidSubject,
}

impl ValidationError {
    /// The field the user has to fix.
    pub fn field(&self) -> TicketField {
        match self {
            ValidationError::EmptyField(field) => *field,
            ValidationError::InvalidName => TicketField::ClientName,
            ValidationError::InvalidEmail => TicketField::ClientEmail,
            ValidationError::InvalidPhone => TicketField::ClientNumber,
            ValidationError::InvalidSubject => TicketField::TicketSubject,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to reach ticket service: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("ticket service responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("ticket service returned an unreadable response: {0}")]
    InvalidResponse(String),
}
