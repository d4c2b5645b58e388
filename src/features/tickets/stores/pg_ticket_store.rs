use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{NewTicket, Ticket, TicketPatch};
use crate::features::tickets::stores::TicketStore;

const TICKET_COLUMNS: &str = "id, title, description, status, inquiry, created_at";

/// PostgreSQL-backed ticket store
pub struct PgTicketStore {
    pool: PgPool,
}

impl PgTicketStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketStore for PgTicketStore {
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket> {
        let query = format!(
            r#"
            INSERT INTO tickets (id, title, description, status, inquiry)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            TICKET_COLUMNS
        );

        sqlx::query_as::<_, Ticket>(&query)
            .bind(Uuid::now_v7())
            .bind(&ticket.title)
            .bind(&ticket.description)
            .bind(ticket.status)
            .bind(ticket.inquiry)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert ticket: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_all(&self) -> Result<Vec<Ticket>> {
        // id is UUID v7, so it breaks created_at ties in insertion order
        let query = format!(
            "SELECT {} FROM tickets ORDER BY created_at DESC, id DESC",
            TICKET_COLUMNS
        );

        sqlx::query_as::<_, Ticket>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list tickets: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>> {
        let query = format!("SELECT {} FROM tickets WHERE id = $1", TICKET_COLUMNS);

        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get ticket by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: Uuid, patch: TicketPatch) -> Result<Option<Ticket>> {
        let (set_description, description) = match patch.description {
            Some(description) => (true, description),
            None => (false, None),
        };

        let query = format!(
            r#"
            UPDATE tickets
            SET title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                status = COALESCE($5, status)
            WHERE id = $1
            RETURNING {}
            "#,
            TICKET_COLUMNS
        );

        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(patch.title)
            .bind(set_description)
            .bind(description)
            .bind(patch.status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update ticket: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete ticket: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tickets::models::{InquiryCategory, TicketStatus};

    fn new_ticket(title: &str) -> NewTicket {
        NewTicket {
            title: title.to_string(),
            description: Some("details".to_string()),
            status: TicketStatus::Open,
            inquiry: InquiryCategory::General,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_insert_and_find(pool: PgPool) {
        let store = PgTicketStore::new(pool);

        let inserted = store.insert(new_ticket("First")).await.unwrap();
        let found = store.find_by_id(inserted.id).await.unwrap();

        assert_eq!(found, Some(inserted));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_find_all_newest_first(pool: PgPool) {
        let store = PgTicketStore::new(pool);

        let first = store.insert(new_ticket("First")).await.unwrap();
        let second = store.insert(new_ticket("Second")).await.unwrap();

        let ids: Vec<Uuid> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_update_can_clear_description(pool: PgPool) {
        let store = PgTicketStore::new(pool);
        let inserted = store.insert(new_ticket("First")).await.unwrap();

        let updated = store
            .update(inserted.id, TicketPatch::content("Renamed".to_string(), None))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, None);
        assert_eq!(updated.status, TicketStatus::Open);
        assert_eq!(updated.created_at, inserted.created_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_missing_ids(pool: PgPool) {
        let store = PgTicketStore::new(pool);
        let id = Uuid::now_v7();

        assert!(store.find_by_id(id).await.unwrap().is_none());
        assert!(store
            .update(id, TicketPatch::status(TicketStatus::Fulfilled))
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete(id).await.unwrap());
    }
}
