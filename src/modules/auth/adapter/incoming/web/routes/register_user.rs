use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::ports::incoming::use_cases::{
    RegisterCommand, RegisterCommandError, RegisterError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Email address, also the login key
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Optional; defaults to the email
    pub username: Option<String>,

    /// At least 6 characters
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Register a new account
///
/// Always creates a regular user; there is no admin registration path.
#[utoipa::path(
    post,
    path = "/auth/register/",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email or username already taken"),
    )
)]
#[post("/auth/register/")]
pub async fn register_user_handler(
    payload: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match RegisterCommand::new(
        dto.email,
        dto.username,
        dto.password,
        dto.first_name,
        dto.last_name,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.register_use_case.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "User registered");
            ApiResponse::created(user)
        }
        Err(err) => map_register_error(err),
    }
}

fn map_command_error(err: RegisterCommandError) -> actix_web::HttpResponse {
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}

fn map_register_error(err: RegisterError) -> actix_web::HttpResponse {
    match err {
        RegisterError::EmailTaken => {
            warn!("Registration rejected: email taken");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "Email already registered")
        }
        RegisterError::UsernameTaken => {
            warn!("Registration rejected: username taken");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "Username already taken")
        }
        RegisterError::HashingFailed(ref e) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        RegisterError::RepositoryError(ref e) => {
            error!(error = %e, "User persistence failed");
            ApiResponse::internal_error()
        }
    }
}
