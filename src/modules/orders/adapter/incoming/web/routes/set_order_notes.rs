use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::orders::application::ports::incoming::use_cases::SetOrderNotesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetOrderNotesRequestDto {
    /// Missing key writes an empty string
    pub admin_notes: Option<String>,
}

/// Overwrite an order's internal notes (admin only).
#[utoipa::path(
    put,
    path = "/admin/orders/{order_id}/notes/",
    tag = "orders",
    request_body = SetOrderNotesRequestDto,
    responses(
        (status = 200, description = "Updated order"),
        (status = 404, description = "Unknown order"),
    ),
    security(("bearer_auth" = []))
)]
#[put("/admin/orders/{order_id}/notes/")]
pub async fn set_order_notes_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    payload: web::Json<SetOrderNotesRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();
    let notes = payload.into_inner().admin_notes.unwrap_or_default();

    match data.set_order_notes_use_case.execute(order_id, notes).await {
        Ok(order) => {
            info!(%order_id, "Order notes updated");
            ApiResponse::success(order)
        }
        Err(SetOrderNotesError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(SetOrderNotesError::RepositoryError(ref e)) => {
            error!(error = %e, %order_id, "Order notes update failed");
            ApiResponse::internal_error()
        }
    }
}
