use async_trait::async_trait;

use crate::catalog::application::domain::Product;
use crate::catalog::application::ports::outgoing::ProductOrdering;

/// Listing parameters as they arrive from the query string. Unknown ordering
/// keys are ignored rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ProductListQuery {
    pub fn ordering(&self) -> ProductOrdering {
        self.ordering
            .as_deref()
            .and_then(ProductOrdering::parse)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProductsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Public listing: soft-deleted products are excluded.
#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, query: ProductListQuery) -> Result<Vec<Product>, ListProductsError>;

    /// Admin listing: soft-deleted products included.
    async fn execute_admin(
        &self,
        query: ProductListQuery,
    ) -> Result<Vec<Product>, ListProductsError>;
}
