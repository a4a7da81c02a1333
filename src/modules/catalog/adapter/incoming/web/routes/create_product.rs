use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductCommand, CreateProductError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequestDto {
    pub name: String,

    /// Optional; derived from the name when absent
    pub slug: Option<String>,

    pub description: Option<String>,
    pub category: Option<String>,

    /// Decimal as string, e.g. "0.25"
    pub weight: Option<Decimal>,

    /// Decimal as string, e.g. "19.99"
    pub price: Decimal,

    /// Defaults to 0
    pub stock: Option<i32>,
}

/// Create a product. Any authenticated user may create; only soft delete is
/// restricted to admins.
#[utoipa::path(
    post,
    path = "/products/",
    tag = "catalog",
    request_body = CreateProductRequestDto,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Slug already taken"),
    ),
    security(("bearer_auth" = []))
)]
#[post("/products/")]
pub async fn create_product_handler(
    _user: AuthenticatedUser,
    payload: web::Json<CreateProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateProductCommand::new(
        dto.name,
        dto.slug,
        dto.description,
        dto.category,
        dto.weight,
        dto.price,
        dto.stock,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.create_product_use_case.execute(command).await {
        Ok(product) => {
            info!(product_id = %product.id, slug = %product.slug, "Product created");
            ApiResponse::created(product)
        }
        Err(CreateProductError::SlugTaken) => {
            ApiResponse::conflict("VALIDATION_ERROR", "Slug already taken")
        }
        Err(CreateProductError::RepositoryError(ref e)) => {
            error!(error = %e, "Product persistence failed");
            ApiResponse::internal_error()
        }
    }
}
