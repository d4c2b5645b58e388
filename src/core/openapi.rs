use utoipa::{Modify, OpenApi};

use crate::features::tickets::{
    dtos as tickets_dtos, handlers as tickets_handlers, models as tickets_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        tickets_handlers::list_tickets,
        tickets_handlers::get_ticket,
        tickets_handlers::create_ticket,
        tickets_handlers::update_ticket,
        tickets_handlers::resolve_ticket,
        tickets_handlers::delete_ticket,
    ),
    components(
        schemas(
            Meta,
            tickets_models::TicketStatus,
            tickets_models::InquiryCategory,
            tickets_dtos::TicketResponseDto,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::UpdateTicketDto,
            ApiResponse<tickets_dtos::TicketResponseDto>,
            ApiResponse<Vec<tickets_dtos::TicketResponseDto>>,
        )
    ),
    tags(
        (name = "tickets", description = "Support tickets"),
    ),
    info(
        title = "Ticketdesk API",
        version = "0.1.0",
        description = "API documentation for Ticketdesk",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
