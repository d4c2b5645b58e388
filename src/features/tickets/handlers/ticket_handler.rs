use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppPath, ValidatedJson};
use crate::features::tickets::dtos::{CreateTicketDto, TicketResponseDto, UpdateTicketDto};
use crate::features::tickets::services::TicketService;
use crate::shared::types::{ApiResponse, Meta};

/// List all tickets, newest first
#[utoipa::path(
    get,
    path = "/api/tickets",
    responses(
        (status = 200, description = "List of tickets", body = ApiResponse<Vec<TicketResponseDto>>),
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(service): State<Arc<TicketService>>,
) -> Json<ApiResponse<Vec<TicketResponseDto>>> {
    let tickets = service.list().await;
    let total = tickets.len() as i64;
    Json(ApiResponse::success(
        Some(tickets),
        None,
        Some(Meta { total }),
    ))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = ApiResponse<TicketResponseDto>),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(service): State<Arc<TicketService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(ticket), None, None)))
}

/// Create a ticket
///
/// The inquiry category is inferred from the title. A blank title creates
/// nothing and answers with `data: null`.
#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket created, or ignored when the title is blank", body = ApiResponse<TicketResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    ValidatedJson(dto): ValidatedJson<CreateTicketDto>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let response = match service.create(dto).await? {
        Some(ticket) => ApiResponse::success(Some(ticket), None, None),
        None => ApiResponse::success(
            None,
            Some("Title is empty, no ticket created".to_string()),
            None,
        ),
    };
    Ok(Json(response))
}

/// Update a ticket's title and description
#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = ApiResponse<TicketResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(service): State<Arc<TicketService>>,
    AppPath(id): AppPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTicketDto>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(ticket), None, None)))
}

/// Mark a ticket as fulfilled
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/resolve",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket resolved", body = ApiResponse<TicketResponseDto>),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn resolve_ticket(
    State(service): State<Arc<TicketService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.resolve(id).await?;
    Ok(Json(ApiResponse::success(Some(ticket), None, None)))
}

/// Delete a ticket permanently
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(service): State<Arc<TicketService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
