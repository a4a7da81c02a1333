use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::Role;

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

/// Validated registration input. Username falls back to the email when the
/// client does not supply one. Role is not part of the command at all:
/// registration always produces a regular user.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    email: String,
    username: String,
    password: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

impl RegisterCommand {
    pub fn new(
        email: String,
        username: Option<String>,
        password: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, RegisterCommandError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(RegisterCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterCommandError::InvalidEmailFormat);
        }
        if password.chars().count() < 6 {
            return Err(RegisterCommandError::PasswordTooShort);
        }

        let username = match username.map(|u| u.trim().to_string()) {
            Some(u) if !u.is_empty() => u,
            _ => email.clone(),
        };

        Ok(Self {
            email,
            username,
            password,
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, command: RegisterCommand) -> Result<RegisteredUser, RegisterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_shorter_than_six_chars_is_rejected() {
        let result = RegisterCommand::new(
            "a@b.com".into(),
            None,
            "abc".into(),
            None,
            None,
        );
        assert!(matches!(result, Err(RegisterCommandError::PasswordTooShort)));
    }

    #[test]
    fn six_char_password_is_accepted() {
        let result = RegisterCommand::new("a@b.com".into(), None, "abcdef".into(), None, None);
        assert!(result.is_ok());
    }

    #[test]
    fn username_defaults_to_email() {
        let cmd =
            RegisterCommand::new("shopper@example.com".into(), None, "secret1".into(), None, None)
                .unwrap();
        assert_eq!(cmd.username(), "shopper@example.com");
    }

    #[test]
    fn explicit_username_is_kept() {
        let cmd = RegisterCommand::new(
            "shopper@example.com".into(),
            Some("shopper".into()),
            "secret1".into(),
            Some("Jane".into()),
            None,
        )
        .unwrap();
        assert_eq!(cmd.username(), "shopper");
        assert_eq!(cmd.first_name(), "Jane");
        assert_eq!(cmd.last_name(), "");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = RegisterCommand::new("not-an-email".into(), None, "secret1".into(), None, None);
        assert!(matches!(result, Err(RegisterCommandError::InvalidEmailFormat)));
    }

    #[test]
    fn email_is_normalized_to_lowercase() {
        let cmd =
            RegisterCommand::new(" Shopper@Example.COM ".into(), None, "secret1".into(), None, None)
                .unwrap();
        assert_eq!(cmd.email(), "shopper@example.com");
    }
}
