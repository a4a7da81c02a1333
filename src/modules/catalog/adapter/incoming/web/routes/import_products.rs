use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::ports::incoming::use_cases::ImportProductsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImportProductsRequestDto {
    /// Raw product objects; each goes through the create-product path
    #[schema(value_type = Vec<Object>)]
    pub items: Option<Vec<serde_json::Value>>,
}

/// Bulk import (admin only)
///
/// Rows that fail validation or collide on slug are dropped without failing
/// the batch; only the created products come back.
#[utoipa::path(
    post,
    path = "/admin/products/import_products/",
    tag = "catalog",
    request_body = ImportProductsRequestDto,
    responses(
        (status = 201, description = "Import summary"),
        (status = 400, description = "Missing or empty items list"),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearer_auth" = []))
)]
#[post("/admin/products/import_products/")]
pub async fn import_products_handler(
    _admin: AdminUser,
    payload: web::Json<ImportProductsRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let items = match payload.into_inner().items {
        Some(items) if !items.is_empty() => items,
        _ => {
            return ApiResponse::bad_request("VALIDATION_ERROR", "No items provided");
        }
    };

    match data.import_products_use_case.execute(items).await {
        Ok(summary) => {
            info!(
                created = summary.created.len(),
                skipped = summary.skipped,
                "Product import finished"
            );
            ApiResponse::created(summary)
        }
        Err(ImportProductsError::RepositoryError(ref e)) => {
            error!(error = %e, "Product import aborted");
            ApiResponse::internal_error()
        }
    }
}
