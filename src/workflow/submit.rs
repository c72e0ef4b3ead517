use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::domain::ticket::TicketReceipt;
use crate::domain::validation::validate;
use crate::error::ValidationError;
use crate::form::DraftStore;
use crate::services::{Notice, Notifier, TicketService};

pub const SUBMITTED_MESSAGE: &str = "Ticket submitted successfully!";
pub const FAILED_MESSAGE: &str = "Error submitting form, please try again.";

#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted(TicketReceipt),
    Rejected(ValidationError),
    Failed,
    AlreadySubmitting,
}

/// The support-ticket form: a draft plus the submit action.
pub struct TicketForm {
    draft: DraftStore,
    service: Arc<dyn TicketService>,
    notifier: Arc<dyn Notifier>,
    submitting: AtomicBool,
}

impl TicketForm {
    pub fn new(service: Arc<dyn TicketService>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_store(DraftStore::new(), service, notifier)
    }

    pub fn with_store(
        draft: DraftStore,
        service: Arc<dyn TicketService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            draft,
            service,
            notifier,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn draft(&self) -> &DraftStore {
        &self.draft
    }

    /// Validates the current draft and sends it.
    ///
    /// Only one submission runs at a time; a call made while another is in
    /// flight returns `AlreadySubmitting` without touching the draft. The
    /// draft is cleared only after the service accepts the ticket.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = InFlight::acquire(&self.submitting) else {
            info!("submission already in flight, ignoring");
            return SubmitOutcome::AlreadySubmitting;
        };

        let ticket = match validate(&self.draft.snapshot()) {
            Ok(ticket) => ticket,
            Err(err) => {
                info!(field = err.field().as_str(), "draft rejected: {err}");
                self.notifier.notify(Notice::error(err.to_string()));
                return SubmitOutcome::Rejected(err);
            }
        };

        match self.service.submit(&ticket).await {
            Ok(receipt) => {
                info!(response = %receipt.response, "ticket submitted");
                self.draft.clear();
                self.notifier.notify(Notice::success(SUBMITTED_MESSAGE));
                SubmitOutcome::Submitted(receipt)
            }
            Err(err) => {
                warn!(error = %err, "ticket submission failed");
                self.notifier.notify(Notice::error(FAILED_MESSAGE));
                SubmitOutcome::Failed
            }
        }
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
