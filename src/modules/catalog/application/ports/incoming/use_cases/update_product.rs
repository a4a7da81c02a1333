use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::application::domain::Product;

//
// ──────────────────────────────────────────────────────────
// Update Product Command
// ──────────────────────────────────────────────────────────
//

/// Validated partial update. Only fields present in the request body are
/// carried; the slug is immutable after creation.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    product_id: Uuid,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    weight: Option<Decimal>,
    price: Option<Decimal>,
    stock: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProductCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Stock cannot be negative")]
    NegativeStock,
}

impl UpdateProductCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_id: Uuid,
        name: Option<String>,
        description: Option<String>,
        category: Option<String>,
        weight: Option<Decimal>,
        price: Option<Decimal>,
        stock: Option<i32>,
    ) -> Result<Self, UpdateProductCommandError> {
        let name = match name.map(|n| n.trim().to_string()) {
            Some(n) if n.is_empty() => return Err(UpdateProductCommandError::EmptyName),
            other => other,
        };

        if let Some(p) = price {
            if p.is_sign_negative() && !p.is_zero() {
                return Err(UpdateProductCommandError::NegativePrice);
            }
        }
        if let Some(s) = stock {
            if s < 0 {
                return Err(UpdateProductCommandError::NegativeStock);
            }
        }

        Ok(Self {
            product_id,
            name,
            description,
            category,
            weight,
            price,
            stock,
        })
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn weight(&self) -> Option<Decimal> {
        self.weight
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn stock(&self) -> Option<i32> {
        self.stock
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProductCommand) -> Result<Product, UpdateProductError>;
}
