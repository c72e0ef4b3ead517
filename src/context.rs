use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{Notifier, TicketService};
use crate::workflow::submit::TicketForm;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub ticket_service: Arc<dyn TicketService>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        ticket_service: Arc<dyn TicketService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            ticket_service,
            notifier,
        }
    }

    /// A fresh, empty form wired to this context's service and notifier.
    pub fn new_form(&self) -> TicketForm {
        TicketForm::new(self.ticket_service.clone(), self.notifier.clone())
    }
}
