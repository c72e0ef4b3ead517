pub mod notifier;
pub mod ticket_service;

pub use notifier::{Notice, NoticeLevel, Notifier};
pub use ticket_service::TicketService;
