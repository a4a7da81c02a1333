use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::orders::application::ports::incoming::use_cases::ExportOrdersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const EXPORT_FILENAME: &str = "orders_export.csv";

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExportOrdersRequestDto {
    pub order_ids: Option<Vec<Uuid>>,
}

/// CSV export of selected orders (admin only)
///
/// The one endpoint that bypasses the JSON envelope: the body is raw CSV,
/// served as a file attachment.
#[utoipa::path(
    post,
    path = "/admin/orders/export/",
    tag = "orders",
    request_body = ExportOrdersRequestDto,
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv"),
        (status = 400, description = "Empty or missing id list"),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearer_auth" = []))
)]
#[post("/admin/orders/export/")]
pub async fn export_orders_handler(
    _admin: AdminUser,
    payload: web::Json<ExportOrdersRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_ids = payload.into_inner().order_ids.unwrap_or_default();

    match data.export_orders_use_case.execute(order_ids).await {
        Ok(csv) => {
            info!(rows = csv.lines().count().saturating_sub(1), "Orders exported");
            ApiResponse::csv_attachment(EXPORT_FILENAME, csv)
        }
        Err(ExportOrdersError::EmptyOrderIds) => {
            ApiResponse::bad_request("EMPTY_ORDER_IDS", "No order ids supplied")
        }
        Err(ExportOrdersError::QueryError(ref e)) => {
            error!(error = %e, "Order export failed");
            ApiResponse::internal_error()
        }
    }
}
