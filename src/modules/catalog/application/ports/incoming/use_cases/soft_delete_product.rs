use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SoftDeleteProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hides a product from the catalog without removing the row. Existing order
/// lines keep pointing at it. Deleting an already-deleted product succeeds
/// and changes nothing.
#[async_trait]
pub trait SoftDeleteProductUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<(), SoftDeleteProductError>;
}
