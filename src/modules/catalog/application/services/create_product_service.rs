use async_trait::async_trait;

use crate::catalog::application::domain::slugify;
use crate::catalog::application::domain::Product;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductCommand, CreateProductError, CreateProductUseCase,
};
use crate::catalog::application::ports::outgoing::{
    NewProduct, ProductQuery, ProductRepository, ProductRepositoryError,
};

#[derive(Clone)]
pub struct CreateProductService<Q, R>
where
    Q: ProductQuery,
    R: ProductRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateProductService<Q, R>
where
    Q: ProductQuery,
    R: ProductRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    /// Derives a unique slug from the name: `blue-widget`, then
    /// `blue-widget-1`, `blue-widget-2`, ... until a free one is found.
    async fn derive_slug(&self, name: &str) -> Result<String, CreateProductError> {
        let base = slugify(name);
        let mut candidate = base.clone();
        let mut n: u32 = 1;

        while self
            .query
            .slug_exists(&candidate)
            .await
            .map_err(|e| CreateProductError::RepositoryError(e.to_string()))?
        {
            candidate = format!("{base}-{n}");
            n += 1;
        }

        Ok(candidate)
    }
}

#[async_trait]
impl<Q, R> CreateProductUseCase for CreateProductService<Q, R>
where
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError> {
        let slug = match command.slug() {
            // A client-supplied slug is honored or rejected, never suffixed.
            Some(s) => {
                let taken = self
                    .query
                    .slug_exists(s)
                    .await
                    .map_err(|e| CreateProductError::RepositoryError(e.to_string()))?;
                if taken {
                    return Err(CreateProductError::SlugTaken);
                }
                s.to_string()
            }
            None => self.derive_slug(command.name()).await?,
        };

        self.repository
            .create_product(NewProduct {
                name: command.name().to_string(),
                slug,
                description: command.description().to_string(),
                category: command.category().map(str::to_string),
                weight: command.weight(),
                price: command.price(),
                stock: command.stock(),
            })
            .await
            .map_err(|e| match e {
                ProductRepositoryError::SlugTaken => CreateProductError::SlugTaken,
                other => CreateProductError::RepositoryError(other.to_string()),
            })
    }
}
