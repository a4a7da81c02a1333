use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Single-product detail. Soft-deleted products read as not found on the
/// public path; the admin variant still returns them.
#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<Product, GetProductError>;

    async fn execute_admin(&self, product_id: Uuid) -> Result<Product, GetProductError>;
}
