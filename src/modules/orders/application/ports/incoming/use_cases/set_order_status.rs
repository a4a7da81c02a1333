use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::application::domain::{Order, OrderStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetOrderStatusError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Overwrites the status. Raw strings are parsed at the edge; by the time
/// this runs the status is one of the five valid values.
#[async_trait]
pub trait SetOrderStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, SetOrderStatusError>;
}
