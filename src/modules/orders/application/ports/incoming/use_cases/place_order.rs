use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::application::domain::Order;

//
// ──────────────────────────────────────────────────────────
// Place Order Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct OrderItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Validated order input. Empty orders and zero-quantity lines never reach
/// the repository.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    user_id: Uuid,
    shipping_address: serde_json::Value,
    items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaceOrderCommandError {
    #[error("Order must contain at least one item")]
    EmptyItems,

    #[error("Item quantity must be positive")]
    NonPositiveQuantity,
}

impl PlaceOrderCommand {
    pub fn new(
        user_id: Uuid,
        shipping_address: Option<serde_json::Value>,
        items: Vec<OrderItemRequest>,
    ) -> Result<Self, PlaceOrderCommandError> {
        if items.is_empty() {
            return Err(PlaceOrderCommandError::EmptyItems);
        }
        if items.iter().any(|item| item.quantity <= 0) {
            return Err(PlaceOrderCommandError::NonPositiveQuantity);
        }

        Ok(Self {
            user_id,
            shipping_address: shipping_address.unwrap_or_else(|| serde_json::json!({})),
            items,
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn shipping_address(&self) -> &serde_json::Value {
        &self.shipping_address
    }

    pub fn items(&self) -> &[OrderItemRequest] {
        &self.items
    }

    pub fn into_parts(self) -> (Uuid, serde_json::Value, Vec<OrderItemRequest>) {
        (self.user_id, self.shipping_address, self.items)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaceOrderError {
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, command: PlaceOrderCommand) -> Result<Order, PlaceOrderError>;
}
