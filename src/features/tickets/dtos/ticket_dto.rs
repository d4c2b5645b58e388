use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::tickets::models::{InquiryCategory, Ticket, TicketStatus};

/// Response DTO for ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub inquiry: InquiryCategory,
    pub created_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            status: t.status,
            inquiry: t.inquiry,
            created_at: t.created_at,
        }
    }
}

const TITLE_MAX_CHARS: usize = 200;

/// Length check on the trimmed title, matching what gets stored
fn validate_title_length(title: &str) -> Result<(), ValidationError> {
    if title.trim().chars().count() > TITLE_MAX_CHARS {
        let message = format!("title must be at most {} characters", TITLE_MAX_CHARS);
        return Err(ValidationError::new("length").with_message(message.into()));
    }
    Ok(())
}

fn validate_title_present(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(
            ValidationError::new("required").with_message("title must not be empty".into())
        );
    }
    validate_title_length(title)
}

/// Create request
///
/// A missing, null or blank title is accepted here; the service treats it as a no-op.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    #[serde(default)]
    #[validate(custom(function = "validate_title_length"))]
    pub title: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

/// Update request, replaces title and description
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateTicketDto {
    #[validate(custom(function = "validate_title_present"))]
    pub title: String,

    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(len: usize) -> String {
        format!("   {}   ", "x".repeat(len))
    }

    #[test]
    fn test_create_title_length_ignores_surrounding_whitespace() {
        let dto = CreateTicketDto {
            title: Some(padded(TITLE_MAX_CHARS - 2)),
            description: None,
        };
        assert!(dto.validate().is_ok());

        let dto = CreateTicketDto {
            title: Some("x".repeat(TITLE_MAX_CHARS + 1)),
            description: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_title_may_be_absent() {
        let dto: CreateTicketDto = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(dto.title.is_none());
        assert!(dto.validate().is_ok());

        let dto: CreateTicketDto = serde_json::from_str("{}").unwrap();
        assert!(dto.title.is_none());
    }

    #[test]
    fn test_update_title_checks_trimmed_value() {
        let dto = UpdateTicketDto {
            title: padded(TITLE_MAX_CHARS),
            description: None,
        };
        assert!(dto.validate().is_ok());

        let dto = UpdateTicketDto {
            title: "   ".to_string(),
            description: None,
        };
        assert!(dto.validate().is_err());

        let dto = UpdateTicketDto {
            title: "x".repeat(TITLE_MAX_CHARS + 1),
            description: None,
        };
        assert!(dto.validate().is_err());
    }
}
