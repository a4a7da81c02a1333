use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::catalog::application::domain::Product;

//
// ──────────────────────────────────────────────────────────
// Create Product Command
// ──────────────────────────────────────────────────────────
//

/// Validated product input. A slug supplied by the client is taken as-is
/// (subject to uniqueness); otherwise the service derives one from the name.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    name: String,
    slug: Option<String>,
    description: String,
    category: Option<String>,
    weight: Option<Decimal>,
    price: Decimal,
    stock: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Stock cannot be negative")]
    NegativeStock,
}

impl CreateProductCommand {
    pub fn new(
        name: String,
        slug: Option<String>,
        description: Option<String>,
        category: Option<String>,
        weight: Option<Decimal>,
        price: Decimal,
        stock: Option<i32>,
    ) -> Result<Self, CreateProductCommandError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CreateProductCommandError::EmptyName);
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(CreateProductCommandError::NegativePrice);
        }

        let stock = stock.unwrap_or(0);
        if stock < 0 {
            return Err(CreateProductCommandError::NegativeStock);
        }

        let slug = match slug.map(|s| s.trim().to_string()) {
            Some(s) if !s.is_empty() => Some(s),
            _ => None,
        };

        let category = match category.map(|c| c.trim().to_string()) {
            Some(c) if !c.is_empty() => Some(c),
            _ => None,
        };

        Ok(Self {
            name,
            slug,
            description: description.unwrap_or_default(),
            category,
            weight,
            price,
            stock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn weight(&self) -> Option<Decimal> {
        self.weight
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductError {
    #[error("Slug already taken")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn blank_name_is_rejected() {
        let result =
            CreateProductCommand::new("   ".into(), None, None, None, None, dec!(1.00), None);
        assert!(matches!(result, Err(CreateProductCommandError::EmptyName)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let result =
            CreateProductCommand::new("Widget".into(), None, None, None, None, dec!(-0.01), None);
        assert!(matches!(
            result,
            Err(CreateProductCommandError::NegativePrice)
        ));
    }

    #[test]
    fn zero_price_is_accepted() {
        let cmd = CreateProductCommand::new(
            "Freebie".into(),
            None,
            None,
            None,
            None,
            dec!(0.00),
            None,
        )
        .unwrap();
        assert_eq!(cmd.price(), dec!(0.00));
    }

    #[test]
    fn negative_stock_is_rejected() {
        let result = CreateProductCommand::new(
            "Widget".into(),
            None,
            None,
            None,
            None,
            dec!(1.00),
            Some(-3),
        );
        assert!(matches!(
            result,
            Err(CreateProductCommandError::NegativeStock)
        ));
    }

    #[test]
    fn stock_defaults_to_zero() {
        let cmd =
            CreateProductCommand::new("Widget".into(), None, None, None, None, dec!(1.00), None)
                .unwrap();
        assert_eq!(cmd.stock(), 0);
    }

    #[test]
    fn blank_slug_is_treated_as_absent() {
        let cmd = CreateProductCommand::new(
            "Widget".into(),
            Some("  ".into()),
            None,
            None,
            None,
            dec!(1.00),
            None,
        )
        .unwrap();
        assert!(cmd.slug().is_none());
    }
}
