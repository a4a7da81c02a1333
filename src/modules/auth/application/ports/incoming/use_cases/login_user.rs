use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::Role;

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

/// Validated login input, keyed by email.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(LoginCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginCommandError::InvalidEmailFormat);
        }
        if password.trim().is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserInfo {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: LoginUserInfo,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResponse, LoginError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_rejected() {
        assert!(matches!(
            LoginCommand::new("a@b.com".into(), "   ".into()),
            Err(LoginCommandError::EmptyPassword)
        ));
    }

    #[test]
    fn email_is_lowercased() {
        let cmd = LoginCommand::new("Admin@Shop.COM".into(), "pw".into()).unwrap();
        assert_eq!(cmd.email(), "admin@shop.com");
    }
}
