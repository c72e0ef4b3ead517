use tokio::sync::watch;

use crate::domain::ticket::{TicketDraft, TicketField};

/// In-memory draft for one form session.
///
/// Each field is an independent slot. Front ends call `subscribe` to be told
/// when any slot changes; subscribers only wake on actual changes.
#[derive(Debug)]
pub struct DraftStore {
    draft: watch::Sender<TicketDraft>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::with_draft(TicketDraft::default())
    }

    pub fn with_draft(draft: TicketDraft) -> Self {
        let (draft, _) = watch::channel(draft);
        Self { draft }
    }

    pub fn get(&self, field: TicketField) -> String {
        self.draft.borrow().get(field).to_string()
    }

    pub fn snapshot(&self) -> TicketDraft {
        self.draft.borrow().clone()
    }

    pub fn set(&self, field: TicketField, value: impl Into<String>) {
        let value = value.into();
        self.draft.send_if_modified(|draft| {
            let slot = draft.slot_mut(field);
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        });
    }

    pub fn clear(&self) {
        self.draft.send_if_modified(|draft| {
            if draft.is_empty() {
                return false;
            }
            *draft = TicketDraft::default();
            true
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<TicketDraft> {
        self.draft.subscribe()
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}
