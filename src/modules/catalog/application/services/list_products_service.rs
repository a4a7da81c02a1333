use async_trait::async_trait;

use crate::catalog::application::domain::Product;
use crate::catalog::application::ports::incoming::use_cases::{
    ListProductsError, ListProductsUseCase, ProductListQuery,
};
use crate::catalog::application::ports::outgoing::{ProductFilter, ProductQuery};

#[derive(Clone)]
pub struct ListProductsService<Q>
where
    Q: ProductQuery,
{
    query: Q,
}

impl<Q> ListProductsService<Q>
where
    Q: ProductQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn list(
        &self,
        query: ProductListQuery,
        include_deleted: bool,
    ) -> Result<Vec<Product>, ListProductsError> {
        let ordering = query.ordering();
        self.query
            .list_products(ProductFilter {
                category: query.category,
                search: query.search,
                ordering,
                include_deleted,
            })
            .await
            .map_err(|e| ListProductsError::QueryError(e.to_string()))
    }
}

#[async_trait]
impl<Q> ListProductsUseCase for ListProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self, query: ProductListQuery) -> Result<Vec<Product>, ListProductsError> {
        self.list(query, false).await
    }

    async fn execute_admin(
        &self,
        query: ProductListQuery,
    ) -> Result<Vec<Product>, ListProductsError> {
        self.list(query, true).await
    }
}
