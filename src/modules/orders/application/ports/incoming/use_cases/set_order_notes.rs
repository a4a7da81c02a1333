use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::application::domain::Order;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetOrderNotesError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Overwrites the internal notes unconditionally, empty string included.
#[async_trait]
pub trait SetOrderNotesUseCase: Send + Sync {
    async fn execute(&self, order_id: Uuid, notes: String) -> Result<Order, SetOrderNotesError>;
}
