use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::Role;
use crate::auth::application::ports::incoming::use_cases::{
    RegisterCommand, RegisterError, RegisterUseCase, RegisteredUser,
};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterCommand) -> Result<RegisteredUser, RegisterError> {
        // 1. Duplicate checks up front for clean error codes; the unique
        //    indexes remain the real guarantee.
        if let Ok(Some(_)) = self.query.find_by_email(command.email()).await {
            return Err(RegisterError::EmailTaken);
        }
        if let Ok(Some(_)) = self.query.find_by_username(command.username()).await {
            return Err(RegisterError::UsernameTaken);
        }

        // 2. Hash the password before anything touches the database.
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        // 3. Persist. Role is always `user`; there is no admin registration
        //    path by design.
        let created = self
            .repository
            .create_user(NewUser {
                email: command.email().to_string(),
                username: command.username().to_string(),
                password_hash,
                first_name: command.first_name().to_string(),
                last_name: command.last_name().to_string(),
                role: Role::User,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterError::EmailTaken,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        Ok(RegisteredUser {
            id: created.id,
            email: created.email,
            username: created.username,
            first_name: created.first_name,
            last_name: created.last_name,
            role: created.role,
        })
    }
}
