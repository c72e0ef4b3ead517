use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ticket::{TicketDraft, TicketField, ValidTicket};
use crate::error::ValidationError;

static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
// Egyptian mobile numbers: optional +20 / 0020 / 0 prefix, then 1[0125] and eight digits.
static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+20|0020|0)?1(0|1|2|5)[0-9]{8}$").unwrap());
static RE_SUBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s']+$").unwrap());

/// Checks a draft in a fixed order and reports only the first problem.
///
/// Blank fields are checked first (after trimming), then name, email, phone
/// and subject formats against the raw values. The message has no format
/// rule.
pub fn validate(draft: &TicketDraft) -> Result<ValidTicket, ValidationError> {
    if let Some(blank) = TicketField::ALL
        .into_iter()
        .find(|field| is_blank(draft.get(*field)))
    {
        return Err(ValidationError::EmptyField(blank));
    }

    if !is_valid_name(&draft.client_name) {
        return Err(ValidationError::InvalidName);
    }
    if !is_valid_email(&draft.client_email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(&draft.client_number) {
        return Err(ValidationError::InvalidPhone);
    }
    if !is_valid_subject(&draft.ticket_subject) {
        return Err(ValidationError::InvalidSubject);
    }

    Ok(ValidTicket::new_unchecked(draft.clone()))
}

// Browsers also strip the byte-order mark when trimming.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

pub fn is_valid_name(value: &str) -> bool {
    RE_NAME.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    RE_PHONE.is_match(value)
}

pub fn is_valid_subject(value: &str) -> bool {
    RE_SUBJECT.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TicketDraft {
        TicketDraft {
            client_name: "Jane Doe".to_string(),
            client_email: "a@b.co".to_string(),
            client_number: "01012345678".to_string(),
            ticket_subject: "Login issue".to_string(),
            ticket_message: "The login page keeps spinning.".to_string(),
        }
    }

    #[test]
    fn accepts_valid_draft() {
        let ticket = validate(&valid_draft()).unwrap();
        assert_eq!(ticket.draft(), &valid_draft());
    }

    #[test]
    fn rejects_blank_and_whitespace_fields() {
        for field in TicketField::ALL {
            for blank in ["", "   ", "\t\n", "\u{feff}", " \u{feff}\u{a0}"] {
                let mut draft = valid_draft();
                *draft.slot_mut(field) = blank.to_string();
                assert_eq!(
                    validate(&draft),
                    Err(ValidationError::EmptyField(field)),
                    "{field:?} = {blank:?}"
                );
            }
        }
    }

    #[test]
    fn empty_check_runs_before_format_checks() {
        let draft = TicketDraft {
            client_name: "Jane123".to_string(),
            ticket_message: " ".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft),
            Err(ValidationError::EmptyField(TicketField::TicketMessage))
        );
    }

    #[test]
    fn reports_first_failing_format_only() {
        let draft = TicketDraft {
            client_name: "Jane123".to_string(),
            client_email: "a@b".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), Err(ValidationError::InvalidName));

        let draft = TicketDraft {
            client_email: "a@b".to_string(),
            client_number: "123456".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), Err(ValidationError::InvalidEmail));

        let draft = TicketDraft {
            client_number: "123456".to_string(),
            ticket_subject: "Login!!".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), Err(ValidationError::InvalidPhone));

        let draft = TicketDraft {
            ticket_subject: "Login!!".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), Err(ValidationError::InvalidSubject));
    }

    #[test]
    fn checks_names() {
        assert!(is_valid_name("Jane Doe"));
        assert!(!is_valid_name("Jane123"));
        assert!(!is_valid_name("Jane-Doe"));
    }

    #[test]
    fn checks_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn checks_phone_numbers() {
        assert!(is_valid_phone("01012345678"));
        assert!(is_valid_phone("+201112345678"));
        assert!(is_valid_phone("0020112345678"));
        assert!(is_valid_phone("1512345678"));
        assert!(!is_valid_phone("01312345678"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("010123456789"));
        assert!(!is_valid_phone("0101234567٨"));
    }

    #[test]
    fn checks_subjects() {
        assert!(is_valid_subject("Login issue"));
        assert!(is_valid_subject("Can't log in"));
        assert!(!is_valid_subject("Login!!"));
    }

    #[test]
    fn messages_match_user_facing_text() {
        assert_eq!(
            ValidationError::EmptyField(TicketField::ClientName).to_string(),
            "Please fill all fields."
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number."
        );
        assert_eq!(
            ValidationError::InvalidSubject.to_string(),
            "Please enter a valid subject"
        );
        assert_eq!(
            ValidationError::InvalidEmail.field(),
            TicketField::ClientEmail
        );
    }
}
