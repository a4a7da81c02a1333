use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::application::domain::Product;

/// Insert payload. The slug arrives already derived and deduplicated by the
/// service layer; the unique index is the last line of defense.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: Option<String>,
    pub weight: Option<Decimal>,
    pub price: Decimal,
    pub stock: i32,
}

/// Partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub weight: Option<Decimal>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Slug already taken")]
    SlugTaken,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(&self, data: NewProduct) -> Result<Product, ProductRepositoryError>;

    async fn update_product(
        &self,
        product_id: Uuid,
        patch: ProductPatch,
    ) -> Result<Product, ProductRepositoryError>;

    /// Flips `is_deleted`. Never removes the row.
    async fn soft_delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError>;
}
