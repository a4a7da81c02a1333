use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::auth::application::ports::incoming::use_cases::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshRequestDto {
    pub refresh: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshResponseDto {
    pub access: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/auth/token/refresh/",
    tag = "auth",
    request_body = RefreshRequestDto,
    responses(
        (status = 200, description = "New access token issued"),
        (status = 401, description = "Expired or invalid refresh token"),
    )
)]
#[post("/auth/token/refresh/")]
pub async fn refresh_token_handler(
    payload: web::Json<RefreshRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let refresh = payload.into_inner().refresh;

    if refresh.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Refresh token cannot be empty");
    }

    match data.refresh_token_use_case.execute(refresh.trim()).await {
        Ok(access) => ApiResponse::success(RefreshResponseDto { access }),
        Err(RefreshTokenError::TokenExpired) => {
            warn!("Token refresh failed: expired");
            ApiResponse::unauthorized("INVALID_TOKEN", "Refresh token has expired")
        }
        Err(RefreshTokenError::TokenInvalid) => {
            warn!("Token refresh failed: invalid");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }
        Err(RefreshTokenError::TokenGenerationFailed(_)) => ApiResponse::internal_error(),
    }
}
