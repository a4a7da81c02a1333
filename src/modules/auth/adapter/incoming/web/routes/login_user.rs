use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub password: String,
}

/// Obtain an access + refresh token pair, keyed by email
#[utoipa::path(
    post,
    path = "/auth/login/",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Token pair issued"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account inactive"),
    )
)]
#[post("/auth/login/")]
pub async fn login_user_handler(
    payload: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    info!(email = %dto.email, "Login attempt");

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_use_case.execute(command).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");
            ApiResponse::success(response)
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginError::AccountInactive) => {
            warn!("Login failed: inactive account");
            ApiResponse::forbidden("ACCOUNT_INACTIVE", "This account is inactive")
        }
        Err(LoginError::VerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::auth::application::domain::Role;
    use crate::auth::application::ports::incoming::use_cases::login_user::LoginUserInfo;
    use crate::auth::application::ports::incoming::use_cases::{LoginResponse, LoginUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockLoginUseCase {
        result: Result<LoginResponse, LoginError>,
    }

    #[async_trait]
    impl LoginUseCase for MockLoginUseCase {
        async fn execute(&self, _command: LoginCommand) -> Result<LoginResponse, LoginError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn successful_login_returns_token_pair() {
        let state = TestAppStateBuilder::default()
            .with_login(MockLoginUseCase {
                result: Ok(LoginResponse {
                    access: "a".into(),
                    refresh: "r".into(),
                    user: LoginUserInfo {
                        id: Uuid::new_v4(),
                        email: "jane@example.com".into(),
                        username: "jane".into(),
                        role: Role::User,
                    },
                }),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login/")
            .set_json(serde_json::json!({
                "email": "jane@example.com",
                "password": "secret1"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["access"], "a");
        assert_eq!(json["data"]["refresh"], "r");
    }

    #[actix_web::test]
    async fn invalid_credentials_return_unauthorized() {
        let state = TestAppStateBuilder::default()
            .with_login(MockLoginUseCase {
                result: Err(LoginError::InvalidCredentials),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login/")
            .set_json(serde_json::json!({
                "email": "jane@example.com",
                "password": "wrong"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
