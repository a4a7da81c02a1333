use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::Product;
use crate::catalog::application::ports::incoming::use_cases::{GetProductError, GetProductUseCase};
use crate::catalog::application::ports::outgoing::ProductQuery;

#[derive(Clone)]
pub struct GetProductService<Q>
where
    Q: ProductQuery,
{
    query: Q,
}

impl<Q> GetProductService<Q>
where
    Q: ProductQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn find(
        &self,
        product_id: Uuid,
        include_deleted: bool,
    ) -> Result<Product, GetProductError> {
        self.query
            .find_by_id(product_id, include_deleted)
            .await
            .map_err(|e| GetProductError::QueryError(e.to_string()))?
            .ok_or(GetProductError::ProductNotFound)
    }
}

#[async_trait]
impl<Q> GetProductUseCase for GetProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<Product, GetProductError> {
        self.find(product_id, false).await
    }

    async fn execute_admin(&self, product_id: Uuid) -> Result<Product, GetProductError> {
        self.find(product_id, true).await
    }
}
