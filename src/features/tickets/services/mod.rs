mod categorization;
mod ticket_service;

pub use categorization::categorize;
pub use ticket_service::TicketService;
