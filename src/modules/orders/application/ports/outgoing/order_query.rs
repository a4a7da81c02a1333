use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::orders::application::domain::{Order, OrderStatus};

/// Visibility scope for listings. The service layer decides which one
/// applies; the query never sees roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    /// Orders owned by one user.
    User(Uuid),
    /// Every order.
    All,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait OrderQuery: Send + Sync {
    /// Newest first. `created_date` narrows to orders placed on that UTC day.
    async fn list_orders(
        &self,
        scope: OrderScope,
        status: Option<OrderStatus>,
        created_date: Option<NaiveDate>,
    ) -> Result<Vec<Order>, OrderQueryError>;

    /// Unknown ids are silently omitted from the result.
    async fn find_by_ids(&self, order_ids: &[Uuid]) -> Result<Vec<Order>, OrderQueryError>;
}
