use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::tickets::models::{NewTicket, Ticket, TicketPatch};

/// Persistence boundary for ticket records.
///
/// Each call is a single record-level operation; there are no transactions.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Persist a new ticket, assigning `id` and `created_at`.
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket>;

    /// All tickets, newest first.
    async fn find_all(&self) -> Result<Vec<Ticket>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>>;

    /// Apply `patch` to the ticket. Returns `None` when `id` does not exist.
    async fn update(&self, id: Uuid, patch: TicketPatch) -> Result<Option<Ticket>>;

    /// Permanently remove the ticket. Returns `false` when `id` does not exist.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
