use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::Role;
use crate::orders::application::domain::{Order, OrderStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListOrdersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Role-scoped listing: admins see every order, everyone else only their
/// own. Status and placement-date filtering apply in both cases; newest
/// first.
#[async_trait]
pub trait ListOrdersUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        role: Role,
        status: Option<OrderStatus>,
        created_date: Option<NaiveDate>,
    ) -> Result<Vec<Order>, ListOrdersError>;
}
