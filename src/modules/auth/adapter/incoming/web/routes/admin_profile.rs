use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::ports::incoming::use_cases::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller's own profile; admin role required.
///
/// The `AdminUser` extractor rejects non-admin principals with 403 before
/// this body runs, so a regular user never reaches the query.
#[utoipa::path(
    get,
    path = "/admin/profile/",
    tag = "auth",
    responses(
        (status = 200, description = "Caller profile"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearer_auth" = []))
)]
#[get("/admin/profile/")]
pub async fn admin_profile_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.fetch_profile_use_case.execute(admin.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchProfileError::UserNotFound) => {
            // Token outlived the account
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchProfileError::QueryError(ref e)) => {
            error!(error = %e, "Profile query failed");
            ApiResponse::internal_error()
        }
    }
}
