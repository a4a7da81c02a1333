use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::ports::incoming::use_cases::SoftDeleteProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete a product (admin only)
///
/// The row stays in place so past order lines keep their reference; the
/// product just disappears from public listings.
#[utoipa::path(
    delete,
    path = "/products/{product_id}/",
    tag = "catalog",
    responses(
        (status = 204, description = "Product hidden"),
        (status = 404, description = "Unknown product"),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/products/{product_id}/")]
pub async fn delete_product_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    soft_delete(path.into_inner(), &data).await
}

/// Same soft delete, exposed on the admin prefix.
#[utoipa::path(
    delete,
    path = "/admin/products/{product_id}/",
    tag = "catalog",
    responses(
        (status = 204, description = "Product hidden"),
        (status = 404, description = "Unknown product"),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/admin/products/{product_id}/")]
pub async fn admin_delete_product_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    soft_delete(path.into_inner(), &data).await
}

async fn soft_delete(product_id: Uuid, data: &web::Data<AppState>) -> HttpResponse {
    match data.soft_delete_product_use_case.execute(product_id).await {
        Ok(()) => {
            info!(%product_id, "Product soft-deleted");
            ApiResponse::no_content()
        }
        Err(SoftDeleteProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(SoftDeleteProductError::RepositoryError(ref e)) => {
            error!(error = %e, %product_id, "Product soft delete failed");
            ApiResponse::internal_error()
        }
    }
}
