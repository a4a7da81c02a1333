use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::ports::incoming::use_cases::ListProductsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::list_products::ProductListParams;

/// Admin catalog listing: identical filters to the public one, but
/// soft-deleted products are included.
#[utoipa::path(
    get,
    path = "/admin/products/",
    tag = "catalog",
    params(ProductListParams),
    responses(
        (status = 200, description = "Product list including soft-deleted"),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearer_auth" = []))
)]
#[get("/admin/products/")]
pub async fn admin_list_products_handler(
    _admin: AdminUser,
    params: web::Query<ProductListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_products_use_case
        .execute_admin(params.into_inner().into())
        .await
    {
        Ok(products) => ApiResponse::success(products),
        Err(ListProductsError::QueryError(ref e)) => {
            error!(error = %e, "Admin product listing failed");
            ApiResponse::internal_error()
        }
    }
}
