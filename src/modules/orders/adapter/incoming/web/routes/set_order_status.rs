use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::orders::application::domain::OrderStatus;
use crate::orders::application::ports::incoming::use_cases::SetOrderStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetOrderStatusRequestDto {
    /// One of Pending, Processing, Shipped, Delivered, Cancelled
    pub status: String,
}

/// Overwrite an order's status (admin only). No transition rules: any of the
/// five values is accepted from any current value.
#[utoipa::path(
    put,
    path = "/admin/orders/{order_id}/status/",
    tag = "orders",
    request_body = SetOrderStatusRequestDto,
    responses(
        (status = 200, description = "Updated order"),
        (status = 400, description = "Not one of the five statuses"),
        (status = 404, description = "Unknown order"),
    ),
    security(("bearer_auth" = []))
)]
#[put("/admin/orders/{order_id}/status/")]
pub async fn set_order_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    payload: web::Json<SetOrderStatusRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    let status = match payload.status.parse::<OrderStatus>() {
        Ok(status) => status,
        Err(_) => {
            return ApiResponse::bad_request(
                "INVALID_STATUS",
                &format!("Invalid order status: {}", payload.status),
            )
        }
    };

    match data
        .set_order_status_use_case
        .execute(order_id, status)
        .await
    {
        Ok(order) => {
            info!(%order_id, status = %status, "Order status updated");
            ApiResponse::success(order)
        }
        Err(SetOrderStatusError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(SetOrderStatusError::RepositoryError(ref e)) => {
            error!(error = %e, %order_id, "Order status update failed");
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
    use std::sync::Arc;

    use crate::auth::application::domain::Role;
    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::orders::application::domain::Order;
    use crate::orders::application::ports::incoming::use_cases::SetOrderStatusUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    struct MockSetStatus {
        result: Result<Order, SetOrderStatusError>,
    }

    #[async_trait]
    impl SetOrderStatusUseCase for MockSetStatus {
        async fn execute(
            &self,
            _order_id: Uuid,
            _status: OrderStatus,
        ) -> Result<Order, SetOrderStatusError> {
            self.result.clone()
        }
    }

    fn shipped_order() -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id: None,
            user_email: None,
            status: OrderStatus::Shipped,
            total: dec!(1.00),
            shipping_address: serde_json::json!({}),
            admin_notes: String::new(),
            created_at: Utc::now(),
            items: vec![],
        }
    }

    fn admin_token() -> web::Data<Arc<dyn TokenProvider>> {
        web::Data::new(Arc::new(StubTokenProvider {
            user_id: Uuid::new_v4(),
            role: Role::Admin,
        }) as Arc<dyn TokenProvider>)
    }

    #[actix_web::test]
    async fn valid_status_is_applied() {
        let state = TestAppStateBuilder::default()
            .with_set_order_status(MockSetStatus {
                result: Ok(shipped_order()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(admin_token())
                .service(set_order_status_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/admin/orders/{}/status/", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({"status": "Shipped"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["status"], "Shipped");
    }

    #[actix_web::test]
    async fn decorated_status_is_rejected() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(admin_token())
                .service(set_order_status_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/admin/orders/{}/status/", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({"status": "Shipped!"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_STATUS");
    }

    #[actix_web::test]
    async fn unknown_order_is_404() {
        let state = TestAppStateBuilder::default()
            .with_set_order_status(MockSetStatus {
                result: Err(SetOrderStatusError::OrderNotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(admin_token())
                .service(set_order_status_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/admin/orders/{}/status/", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({"status": "Delivered"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
