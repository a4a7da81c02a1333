use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::OrderStatus;

/// Order line. `product_id` and `product_name` go `None` when the product
/// row was hard-removed; the captured price and quantity survive regardless.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub product_id: Option<Uuid>,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
}

/// Fully populated order as served to clients: owner email and product names
/// are denormalized in so no caller needs a second round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub user_email: Option<String>,
    pub status: OrderStatus,
    pub total: Decimal,
    pub shipping_address: serde_json::Value,
    pub admin_notes: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}
