use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::Product;

/// Sort order for listings. Unknown `ordering` values from the query string
/// fall back to the default rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductOrdering {
    PriceAsc,
    PriceDesc,
    CreatedAtAsc,
    #[default]
    CreatedAtDesc,
}

impl ProductOrdering {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "price" => Some(Self::PriceAsc),
            "-price" => Some(Self::PriceDesc),
            "created_at" => Some(Self::CreatedAtAsc),
            "-created_at" => Some(Self::CreatedAtDesc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    /// Case-insensitive substring match on name, slug, category and
    /// description.
    pub search: Option<String>,
    pub ordering: ProductOrdering,
    pub include_deleted: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductQueryError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ProductQuery: Send + Sync {
    async fn list_products(&self, filter: ProductFilter)
        -> Result<Vec<Product>, ProductQueryError>;

    /// Soft-deleted rows are returned only when `include_deleted` is set.
    async fn find_by_id(
        &self,
        product_id: Uuid,
        include_deleted: bool,
    ) -> Result<Option<Product>, ProductQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, ProductQueryError>;
}
