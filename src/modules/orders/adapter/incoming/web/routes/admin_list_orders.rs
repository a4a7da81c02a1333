use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::Role;
use crate::orders::application::domain::OrderStatus;
use crate::orders::application::ports::incoming::use_cases::ListOrdersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::list_orders::OrderListParams;

/// Admin order listing: every order, optional status and placement-date
/// filters, newest first.
#[utoipa::path(
    get,
    path = "/admin/orders/",
    tag = "orders",
    params(OrderListParams),
    responses(
        (status = 200, description = "All orders"),
        (status = 400, description = "Invalid status or date filter"),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearer_auth" = []))
)]
#[get("/admin/orders/")]
pub async fn admin_list_orders_handler(
    admin: AdminUser,
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
        .execute(admin.user_id, Role::Admin, status, created_date)
        .await
    {
        Ok(orders) => ApiResponse::success(orders),
        Err(ListOrdersError::QueryError(ref e)) => {
            error!(error = %e, "Admin order listing failed");
            ApiResponse::internal_error()
        }
    }
}
