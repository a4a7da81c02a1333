use actix_web::{route, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminUser, AuthenticatedUser};
use crate::catalog::application::ports::incoming::use_cases::{
    UpdateProductCommand, UpdateProductError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial update body. Absent fields are left untouched; the slug cannot be
/// changed after creation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequestDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub weight: Option<Decimal>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
}

/// Update a product. Any authenticated user may update; only soft delete is
/// restricted to admins.
#[utoipa::path(
    put,
    path = "/products/{product_id}/",
    tag = "catalog",
    request_body = UpdateProductRequestDto,
    responses(
        (status = 200, description = "Updated product"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Unknown product"),
    ),
    security(("bearer_auth" = []))
)]
#[route("/products/{product_id}/", method = "PUT", method = "PATCH")]
pub async fn update_product_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply_update(path.into_inner(), payload.into_inner(), &data).await
}

/// Same update, exposed on the admin prefix.
#[utoipa::path(
    put,
    path = "/admin/products/{product_id}/",
    tag = "catalog",
    request_body = UpdateProductRequestDto,
    responses(
        (status = 200, description = "Updated product"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Unknown product"),
    ),
    security(("bearer_auth" = []))
)]
#[route("/admin/products/{product_id}/", method = "PUT", method = "PATCH")]
pub async fn admin_update_product_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply_update(path.into_inner(), payload.into_inner(), &data).await
}

async fn apply_update(
    product_id: Uuid,
    dto: UpdateProductRequestDto,
    data: &web::Data<AppState>,
) -> HttpResponse {
    let command = match UpdateProductCommand::new(
        product_id,
        dto.name,
        dto.description,
        dto.category,
        dto.weight,
        dto.price,
        dto.stock,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.update_product_use_case.execute(command).await {
        Ok(product) => {
            info!(product_id = %product.id, "Product updated");
            ApiResponse::success(product)
        }
        Err(UpdateProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(UpdateProductError::RepositoryError(ref e)) => {
            error!(error = %e, %product_id, "Product update failed");
            ApiResponse::internal_error()
        }
    }
}
