use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::User;
use crate::auth::application::ports::outgoing::{NewUser, UserRepository, UserRepositoryError};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_error(err: DbErr) -> UserRepositoryError {
        let err_str = err.to_string();
        if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(err_str)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: NewUser) -> Result<User, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            role: Set(data.role.as_str().to_string()),
            is_staff: Set(false),
            is_active: Set(true),
            created_at: Set(Utc::now().into()),
        };

        let inserted: UserModel = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(inserted.to_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::Role;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};

    fn new_user() -> NewUser {
        NewUser {
            email: "shopper@example.com".into(),
            username: "shopper".into(),
            password_hash: "$argon2id$stub".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            role: Role::User,
        }
    }

    fn user_model(email: &str, username: &str, role: &str) -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            email: email.into(),
            username: username.into(),
            password_hash: "$argon2id$stub".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            role: role.into(),
            is_staff: false,
            is_active: true,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(
                "shopper@example.com",
                "shopper",
                "user",
            )]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo.create_user(new_user()).await.unwrap();

        assert_eq!(user.email, "shopper@example.com");
        assert_eq!(user.role, Role::User);
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"users_email_key\"".into(),
            ))])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(new_user()).await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_unknown_role_string_degrades_to_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(
                "shopper@example.com",
                "shopper",
                "superuser",
            )]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo.create_user(new_user()).await.unwrap();

        assert_eq!(user.role, Role::User);
    }
}
