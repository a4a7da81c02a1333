use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::application::domain::Product;

/// Outcome of a bulk import. Rows that fail validation or collide on slug are
/// skipped silently; only the created products are reported.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub created: Vec<Product>,
    pub skipped: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImportProductsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ImportProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        items: Vec<serde_json::Value>,
    ) -> Result<ImportSummary, ImportProductsError>;
}
