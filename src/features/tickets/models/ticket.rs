use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Ticket status enum matching database enum
///
/// The only transition is `Open -> Fulfilled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "ticket_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Fulfilled,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::Fulfilled => write!(f, "fulfilled"),
        }
    }
}

/// Inquiry category inferred from the ticket title at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "inquiry_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InquiryCategory {
    Sales,
    Technical,
    Logistics,
    General,
}

impl std::fmt::Display for InquiryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InquiryCategory::Sales => write!(f, "sales"),
            InquiryCategory::Technical => write!(f, "technical"),
            InquiryCategory::Logistics => write!(f, "logistics"),
            InquiryCategory::General => write!(f, "general"),
        }
    }
}

/// Database model for ticket
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub inquiry: InquiryCategory,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the service on insert; the store assigns `id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub title: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub inquiry: InquiryCategory,
}

/// Partial update applied by the store.
///
/// There is no `inquiry` field; the category is fixed at creation.
/// `description` uses `Some(None)` to clear the column.
#[derive(Debug, Clone, Default)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TicketStatus>,
}

impl TicketPatch {
    pub fn content(title: String, description: Option<String>) -> Self {
        Self {
            title: Some(title),
            description: Some(description),
            status: None,
        }
    }

    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
