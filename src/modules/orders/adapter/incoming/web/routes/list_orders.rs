use actix_web::{get, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::orders::application::domain::OrderStatus;
use crate::orders::application::ports::incoming::use_cases::ListOrdersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderListParams {
    /// One of the five status values, exact spelling
    pub status: Option<String>,

    /// Placement day as `YYYY-MM-DD`, interpreted in UTC
    pub created_at: Option<String>,
}

impl OrderListParams {
    pub(super) fn created_date(&self) -> Result<Option<NaiveDate>, String> {
        match self.created_at.as_deref() {
            Some(raw) => raw
                .parse::<NaiveDate>()
                .map(Some)
                .map_err(|_| format!("Invalid created_at date: {raw}")),
            None => Ok(None),
        }
    }
}

/// Role-scoped order listing
///
/// Admins see every order; everyone else only their own. Newest first.
#[utoipa::path(
    get,
    path = "/orders/",
    tag = "orders",
    params(OrderListParams),
    responses(
        (status = 200, description = "Orders visible to the caller"),
        (status = 400, description = "Invalid status filter"),
    ),
    security(("bearer_auth" = []))
)]
#[get("/orders/")]
pub async fn list_orders_handler(
    user: AuthenticatedUser,
    params: web::Query<OrderListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match params.status.as_deref() {
        Some(raw) => match raw.parse::<OrderStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                return ApiResponse::bad_request(
                    "INVALID_STATUS",
                    &format!("Invalid order status: {raw}"),
                )
            }
        },
        None => None,
    };
    let created_date = match params.created_date() {
        Ok(date) => date,
        Err(message) => return ApiResponse::bad_request("INVALID_DATE", &message),
    };

    match data
        .list_orders_use_case
        .execute(user.user_id, user.role, status, created_date)
        .await
    {
        Ok(orders) => ApiResponse::success(orders),
        Err(ListOrdersError::QueryError(ref e)) => {
            error!(error = %e, "Order listing failed");
            ApiResponse::internal_error()
        }
    }
}
