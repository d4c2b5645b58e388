mod pg_ticket_store;
mod ticket_store;

pub use pg_ticket_store::PgTicketStore;
pub use ticket_store::TicketStore;
