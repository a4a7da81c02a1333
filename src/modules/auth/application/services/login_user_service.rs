use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginResponse, LoginUseCase,
};
use crate::auth::application::ports::incoming::use_cases::login_user::LoginUserInfo;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResponse, LoginError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let password_ok = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if !password_ok {
            return Err(LoginError::InvalidCredentials);
        }

        // Checked after the password so inactive accounts do not leak
        // whether the credentials were right.
        if !user.is_active {
            return Err(LoginError::AccountInactive);
        }

        let access = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            access,
            refresh,
            user: LoginUserInfo {
                id: user.id,
                email: user.email,
                username: user.username,
                role: user.role,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{Role, User};
    use crate::auth::application::ports::outgoing::{
        HashError, TokenClaims, TokenError, UserQueryError,
    };
    use chrono::Utc;
    use uuid::Uuid;

    struct StubQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for StubQuery {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }
        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }
    }

    struct FakeHasher {
        accept: bool,
    }

    #[async_trait]
    impl PasswordHasher for FakeHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!("not used in login tests")
        }
        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.accept)
        }
    }

    struct FakeTokenProvider;

    impl TokenProvider for FakeTokenProvider {
        fn generate_access_token(&self, _user_id: Uuid, _role: Role) -> Result<String, TokenError> {
            Ok("access-token".into())
        }
        fn generate_refresh_token(
            &self,
            _user_id: Uuid,
            _role: Role,
        ) -> Result<String, TokenError> {
            Ok("refresh-token".into())
        }
        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in login tests")
        }
        fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
            unimplemented!("not used in login tests")
        }
    }

    fn admin_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "admin@shop.com".into(),
            username: "admin".into(),
            password_hash: "h".into(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Admin,
            is_staff: true,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn command() -> LoginCommand {
        LoginCommand::new("admin@shop.com".into(), "pw".into()).unwrap()
    }

    #[tokio::test]
    async fn valid_credentials_yield_token_pair() {
        let service = LoginUserService::new(
            StubQuery {
                user: Some(admin_user()),
            },
            Arc::new(FakeHasher { accept: true }),
            Arc::new(FakeTokenProvider),
        );

        let response = service.execute(command()).await.unwrap();

        assert_eq!(response.access, "access-token");
        assert_eq!(response.refresh, "refresh-token");
        assert_eq!(response.user.role, Role::Admin);
    }

    #[tokio::test]
    async fn unknown_email_maps_to_invalid_credentials() {
        let service = LoginUserService::new(
            StubQuery { user: None },
            Arc::new(FakeHasher { accept: true }),
            Arc::new(FakeTokenProvider),
        );

        let result = service.execute(command()).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_maps_to_invalid_credentials() {
        let service = LoginUserService::new(
            StubQuery {
                user: Some(admin_user()),
            },
            Arc::new(FakeHasher { accept: false }),
            Arc::new(FakeTokenProvider),
        );

        let result = service.execute(command()).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn inactive_account_is_refused() {
        let mut user = admin_user();
        user.is_active = false;

        let service = LoginUserService::new(
            StubQuery { user: Some(user) },
            Arc::new(FakeHasher { accept: true }),
            Arc::new(FakeTokenProvider),
        );

        let result = service.execute(command()).await;
        assert!(matches!(result, Err(LoginError::AccountInactive)));
    }
}
