//! Store doubles shared by service and handler tests.
#![cfg(test)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{NewTicket, Ticket, TicketPatch};
use crate::features::tickets::stores::TicketStore;

/// Ticket store kept in a `Vec` in insertion order
#[derive(Default)]
pub struct InMemoryTicketStore {
    tickets: Mutex<Vec<Ticket>>,
}

impl InMemoryTicketStore {
    pub fn len(&self) -> usize {
        self.tickets.lock().unwrap().len()
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket> {
        let ticket = Ticket {
            id: Uuid::now_v7(),
            title: ticket.title,
            description: ticket.description,
            status: ticket.status,
            inquiry: ticket.inquiry,
            created_at: Utc::now(),
        };
        self.tickets.lock().unwrap().push(ticket.clone());
        Ok(ticket)
    }

    async fn find_all(&self) -> Result<Vec<Ticket>> {
        let mut tickets = self.tickets.lock().unwrap().clone();
        // Stable sort over reversed insertion order keeps newest first on timestamp ties
        tickets.reverse();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>> {
        Ok(self
            .tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn update(&self, id: Uuid, patch: TicketPatch) -> Result<Option<Ticket>> {
        let mut tickets = self.tickets.lock().unwrap();
        let Some(ticket) = tickets.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            ticket.title = title;
        }
        if let Some(description) = patch.description {
            ticket.description = description;
        }
        if let Some(status) = patch.status {
            ticket.status = status;
        }

        Ok(Some(ticket.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tickets = self.tickets.lock().unwrap();
        let before = tickets.len();
        tickets.retain(|t| t.id != id);
        Ok(tickets.len() < before)
    }
}

/// Store whose every call fails as if the database were unreachable
pub struct FailingTicketStore;

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl TicketStore for FailingTicketStore {
    async fn insert(&self, _ticket: NewTicket) -> Result<Ticket> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Ticket>> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Ticket>> {
        Err(unavailable())
    }

    async fn update(&self, _id: Uuid, _patch: TicketPatch) -> Result<Option<Ticket>> {
        Err(unavailable())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool> {
        Err(unavailable())
    }
}
