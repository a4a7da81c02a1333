use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Catalog product. `is_deleted` marks soft deletion: hidden from public
/// listings but kept on disk so past orders keep their reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: Option<String>,
    pub weight: Option<Decimal>,
    pub price: Decimal,
    pub stock: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}
