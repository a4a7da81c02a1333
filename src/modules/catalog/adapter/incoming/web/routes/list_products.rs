use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::catalog::application::ports::incoming::use_cases::{
    ListProductsError, ProductListQuery,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListParams {
    /// Exact category match
    pub category: Option<String>,

    /// Case-insensitive substring match on name, slug, category and description
    pub search: Option<String>,

    /// One of `price`, `-price`, `created_at`, `-created_at`
    pub ordering: Option<String>,
}

impl From<ProductListParams> for ProductListQuery {
    fn from(params: ProductListParams) -> Self {
        ProductListQuery {
            category: params.category,
            search: params.search,
            ordering: params.ordering,
        }
    }
}

/// Public catalog listing. Soft-deleted products never appear here.
#[utoipa::path(
    get,
    path = "/products/",
    tag = "catalog",
    params(ProductListParams),
    responses(
        (status = 200, description = "Product list"),
    )
)]
#[get("/products/")]
pub async fn list_products_handler(
    params: web::Query<ProductListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_products_use_case
        .execute(params.into_inner().into())
        .await
    {
        Ok(products) => ApiResponse::success(products),
        Err(ListProductsError::QueryError(ref e)) => {
            error!(error = %e, "Product listing failed");
            ApiResponse::internal_error()
        }
    }
}
