use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::application::domain::{Order, OrderStatus};

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Order placement payload. Prices are deliberately absent: the repository
/// captures them from the product rows inside its transaction.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Uuid,
    pub shipping_address: serde_json::Value,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Order not found")]
    OrderNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Runs the whole placement workflow in one transaction: price capture,
    /// conditional stock decrement, order and item inserts. Any failure
    /// rolls everything back, including stock already decremented.
    async fn place_order(&self, data: NewOrder) -> Result<Order, OrderRepositoryError>;

    async fn set_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderRepositoryError>;

    async fn set_notes(&self, order_id: Uuid, notes: String)
        -> Result<Order, OrderRepositoryError>;
}
