use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::incoming::use_cases::{
    SoftDeleteProductError, SoftDeleteProductUseCase,
};
use crate::catalog::application::ports::outgoing::{ProductRepository, ProductRepositoryError};

#[derive(Clone)]
pub struct SoftDeleteProductService<R>
where
    R: ProductRepository,
{
    repository: R,
}

impl<R> SoftDeleteProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeleteProductUseCase for SoftDeleteProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<(), SoftDeleteProductError> {
        self.repository
            .soft_delete_product(product_id)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => SoftDeleteProductError::ProductNotFound,
                other => SoftDeleteProductError::RepositoryError(other.to_string()),
            })
    }
}
