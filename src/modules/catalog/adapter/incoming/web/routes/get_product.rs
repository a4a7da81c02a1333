use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::ports::incoming::use_cases::GetProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Product detail. Soft-deleted products read as 404.
#[utoipa::path(
    get,
    path = "/products/{product_id}/",
    tag = "catalog",
    responses(
        (status = 200, description = "Product detail"),
        (status = 404, description = "Unknown or deleted product"),
    )
)]
#[get("/products/{product_id}/")]
pub async fn get_product_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.get_product_use_case.execute(product_id).await {
        Ok(product) => ApiResponse::success(product),
        Err(GetProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(GetProductError::QueryError(ref e)) => {
            error!(error = %e, %product_id, "Product lookup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Admin product detail. Unlike the public path this also returns
/// soft-deleted products.
#[utoipa::path(
    get,
    path = "/admin/products/{product_id}/",
    tag = "catalog",
    responses(
        (status = 200, description = "Product detail"),
        (status = 404, description = "Unknown product"),
    ),
    security(("bearer_auth" = []))
)]
#[get("/admin/products/{product_id}/")]
pub async fn admin_get_product_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.get_product_use_case.execute_admin(product_id).await {
        Ok(product) => ApiResponse::success(product),
        Err(GetProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(GetProductError::QueryError(ref e)) => {
            error!(error = %e, %product_id, "Product lookup failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::catalog::application::domain::Product;
    use crate::catalog::application::ports::incoming::use_cases::GetProductUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    use crate::auth::application::domain::Role;
    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::tests::support::stubs::StubTokenProvider;
    use std::sync::Arc;

    struct MockGetProduct {
        public: Result<Product, GetProductError>,
        admin: Result<Product, GetProductError>,
    }

    #[async_trait]
    impl GetProductUseCase for MockGetProduct {
        async fn execute(&self, _product_id: Uuid) -> Result<Product, GetProductError> {
            self.public.clone()
        }

        async fn execute_admin(&self, _product_id: Uuid) -> Result<Product, GetProductError> {
            self.admin.clone()
        }
    }

    fn admin_token() -> web::Data<Arc<dyn TokenProvider>> {
        web::Data::new(Arc::new(StubTokenProvider {
            user_id: Uuid::new_v4(),
            role: Role::Admin,
        }) as Arc<dyn TokenProvider>)
    }

    fn sample_product(id: Uuid, is_deleted: bool) -> Product {
        Product {
            id,
            name: "Blue Widget".into(),
            slug: "blue-widget".into(),
            description: String::new(),
            category: None,
            weight: None,
            price: dec!(10.00),
            stock: 3,
            is_deleted,
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn known_product_is_returned() {
        let id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_get_product(MockGetProduct {
                public: Ok(sample_product(id, false)),
                admin: Ok(sample_product(id, false)),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_product_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/products/{id}/"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_product_is_404() {
        let state = TestAppStateBuilder::default()
            .with_get_product(MockGetProduct {
                public: Err(GetProductError::ProductNotFound),
                admin: Err(GetProductError::ProductNotFound),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_product_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/products/{}/", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "PRODUCT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn admin_detail_includes_soft_deleted() {
        let id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_get_product(MockGetProduct {
                public: Err(GetProductError::ProductNotFound),
                admin: Ok(sample_product(id, true)),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(admin_token())
                .service(admin_get_product_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/admin/products/{id}/"))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["is_deleted"], true);
    }
}
