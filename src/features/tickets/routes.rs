use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route(
            "/api/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route(
            "/api/tickets/{id}",
            get(handlers::get_ticket)
                .put(handlers::update_ticket)
                .delete(handlers::delete_ticket),
        )
        .route("/api/tickets/{id}/resolve", post(handlers::resolve_ticket))
        .with_state(service)
}
