use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::orders::application::ports::incoming::use_cases::{
    OrderItemRequest, PlaceOrderCommand, PlaceOrderCommandError, PlaceOrderError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequestDto {
    /// Free-form address object, stored as-is
    pub shipping_address: Option<serde_json::Value>,
    pub items: Vec<OrderItemDto>,
}

/// Place an order
///
/// Prices are captured from the catalog at this moment; stock is
/// decremented per line when sufficient, and the sale goes through either
/// way.
#[utoipa::path(
    post,
    path = "/orders/",
    tag = "orders",
    request_body = PlaceOrderRequestDto,
    responses(
        (status = 201, description = "Order placed"),
        (status = 400, description = "Empty order or bad quantity"),
        (status = 404, description = "Unknown product"),
    ),
    security(("bearer_auth" = []))
)]
#[post("/orders/")]
pub async fn place_order_handler(
    user: AuthenticatedUser,
    payload: web::Json<PlaceOrderRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match PlaceOrderCommand::new(
        user.user_id,
        dto.shipping_address,
        dto.items
            .into_iter()
            .map(|item| OrderItemRequest {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect(),
    ) {
        Ok(cmd) => cmd,
        Err(PlaceOrderCommandError::EmptyItems) => {
            return ApiResponse::bad_request("EMPTY_ITEMS", "Order must contain at least one item")
        }
        Err(err @ PlaceOrderCommandError::NonPositiveQuantity) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
    };

    match data.place_order_use_case.execute(command).await {
        Ok(order) => {
            info!(order_id = %order.id, total = %order.total, "Order placed");
            ApiResponse::created(order)
        }
        Err(PlaceOrderError::ProductNotFound(product_id)) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", &format!("Product {product_id} not found"))
        }
        Err(PlaceOrderError::RepositoryError(ref e)) => {
            error!(error = %e, "Order placement failed");
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
    use crate::orders::application::domain::{Order, OrderItem, OrderStatus};
    use crate::orders::application::ports::incoming::use_cases::PlaceOrderUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    struct MockPlaceOrder {
        result: Result<Order, PlaceOrderError>,
    }

    #[async_trait]
    impl PlaceOrderUseCase for MockPlaceOrder {
        async fn execute(&self, _command: PlaceOrderCommand) -> Result<Order, PlaceOrderError> {
            self.result.clone()
        }
    }

    fn placed_order(user_id: Uuid) -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            user_email: Some("jane@shop.com".into()),
            status: OrderStatus::Pending,
            total: dec!(30.00),
            shipping_address: serde_json::json!({"city": "Oslo"}),
            admin_notes: String::new(),
            created_at: Utc::now(),
            items: vec![OrderItem {
                id: Uuid::new_v4(),
                product_id: Some(Uuid::new_v4()),
                product_name: Some("Widget".into()),
                quantity: 3,
                price: dec!(10.00),
            }],
        }
    }

    fn token(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider>> {
        web::Data::new(Arc::new(StubTokenProvider {
            user_id,
            role: Role::User,
        }) as Arc<dyn TokenProvider>)
    }

    #[actix_web::test]
    async fn placing_an_order_returns_populated_order() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_place_order(MockPlaceOrder {
                result: Ok(placed_order(user_id)),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token(user_id))
                .service(place_order_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/orders/")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "shipping_address": {"city": "Oslo"},
                "items": [{"product_id": Uuid::new_v4(), "quantity": 3}]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["total"], "30.00");
        assert_eq!(json["data"]["status"], "Pending");
        assert_eq!(json["data"]["items"][0]["quantity"], 3);
    }

    #[actix_web::test]
    async fn empty_item_list_is_rejected() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token(user_id))
                .service(place_order_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/orders/")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({"items": []}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "EMPTY_ITEMS");
    }

    #[actix_web::test]
    async fn unknown_product_is_404() {
        let user_id = Uuid::new_v4();
        let missing = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_place_order(MockPlaceOrder {
                result: Err(PlaceOrderError::ProductNotFound(missing)),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token(user_id))
                .service(place_order_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/orders/")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "items": [{"product_id": missing, "quantity": 1}]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn anonymous_order_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token(Uuid::new_v4()))
                .service(place_order_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/orders/")
            .set_json(serde_json::json!({
                "items": [{"product_id": Uuid::new_v4(), "quantity": 1}]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
