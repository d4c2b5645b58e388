use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{CreateTicketDto, TicketResponseDto, UpdateTicketDto};
use crate::features::tickets::models::{NewTicket, TicketPatch, TicketStatus};
use crate::features::tickets::services::categorize;
use crate::features::tickets::stores::TicketStore;

/// Trim a description and collapse blank input to `None`
fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Ticket '{}' not found", id))
}

/// Service for ticket operations
///
/// Holds no state besides the store handle.
pub struct TicketService {
    store: Arc<dyn TicketStore>,
}

impl TicketService {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    /// List all tickets, newest first.
    ///
    /// A store failure is logged and yields an empty list.
    pub async fn list(&self) -> Vec<TicketResponseDto> {
        match self.store.find_all().await {
            Ok(tickets) => tickets.into_iter().map(|t| t.into()).collect(),
            Err(e) => {
                tracing::warn!("Listing tickets failed, returning empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<TicketResponseDto> {
        self.store
            .find_by_id(id)
            .await?
            .map(|t| t.into())
            .ok_or_else(|| not_found(id))
    }

    /// Create a ticket, inferring its inquiry category from the title.
    ///
    /// A missing or blank title creates nothing and returns `Ok(None)`.
    pub async fn create(&self, dto: CreateTicketDto) -> Result<Option<TicketResponseDto>> {
        let title = dto.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            tracing::debug!("Ignoring ticket creation with empty title");
            return Ok(None);
        }

        let inquiry = categorize(title);
        let ticket = self
            .store
            .insert(NewTicket {
                title: title.to_string(),
                description: normalize_description(dto.description),
                status: TicketStatus::Open,
                inquiry,
            })
            .await?;

        tracing::info!("Ticket created: id={}, inquiry={}", ticket.id, ticket.inquiry);

        Ok(Some(ticket.into()))
    }

    /// Replace title and description. Status and inquiry are left untouched.
    pub async fn update(&self, id: Uuid, dto: UpdateTicketDto) -> Result<TicketResponseDto> {
        let title = dto.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation(
                "Ticket title must not be empty".to_string(),
            ));
        }

        let patch =
            TicketPatch::content(title.to_string(), normalize_description(dto.description));
        let ticket = self
            .store
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Ticket updated: id={}", ticket.id);

        Ok(ticket.into())
    }

    /// Mark a ticket as fulfilled. Resolving a fulfilled ticket is a no-op.
    pub async fn resolve(&self, id: Uuid) -> Result<TicketResponseDto> {
        let ticket = self
            .store
            .update(id, TicketPatch::status(TicketStatus::Fulfilled))
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Ticket resolved: id={}", ticket.id);

        Ok(ticket.into())
    }

    /// Permanently delete a ticket
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Ticket deleted: id={}", id);

        Ok(())
    }
}
