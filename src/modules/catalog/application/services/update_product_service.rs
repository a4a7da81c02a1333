use async_trait::async_trait;

use crate::catalog::application::domain::Product;
use crate::catalog::application::ports::incoming::use_cases::{
    UpdateProductCommand, UpdateProductError, UpdateProductUseCase,
};
use crate::catalog::application::ports::outgoing::{
    ProductPatch, ProductRepository, ProductRepositoryError,
};

#[derive(Clone)]
pub struct UpdateProductService<R>
where
    R: ProductRepository,
{
    repository: R,
}

impl<R> UpdateProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProductUseCase for UpdateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateProductCommand) -> Result<Product, UpdateProductError> {
        self.repository
            .update_product(
                command.product_id(),
                ProductPatch {
                    name: command.name().map(str::to_string),
                    description: command.description().map(str::to_string),
                    category: command.category().map(str::to_string),
                    weight: command.weight(),
                    price: command.price(),
                    stock: command.stock(),
                },
            )
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => UpdateProductError::ProductNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })
    }
}
