use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductCommand, CreateProductError, CreateProductUseCase, ImportProductsError,
    ImportProductsUseCase, ImportSummary,
};

/// Raw import row. Deserialization failure means the row is skipped, so the
/// shape is deliberately forgiving: only name and price are required.
#[derive(Debug, Deserialize)]
struct ImportRow {
    name: String,
    slug: Option<String>,
    description: Option<String>,
    category: Option<String>,
    weight: Option<Decimal>,
    price: Decimal,
    stock: Option<i32>,
}

pub struct ImportProductsService {
    create_product: Arc<dyn CreateProductUseCase>,
}

impl ImportProductsService {
    pub fn new(create_product: Arc<dyn CreateProductUseCase>) -> Self {
        Self { create_product }
    }
}

#[async_trait]
impl ImportProductsUseCase for ImportProductsService {
    /// Best-effort batch insert. Malformed rows, validation failures and slug
    /// collisions are counted and skipped; an infrastructure failure aborts
    /// the whole import.
    async fn execute(
        &self,
        items: Vec<serde_json::Value>,
    ) -> Result<ImportSummary, ImportProductsError> {
        let mut created = Vec::new();
        let mut skipped = 0usize;

        for (index, item) in items.into_iter().enumerate() {
            let row: ImportRow = match serde_json::from_value(item) {
                Ok(row) => row,
                Err(e) => {
                    debug!(row = index, error = %e, "Import row rejected by parser");
                    skipped += 1;
                    continue;
                }
            };

            let command = match CreateProductCommand::new(
                row.name,
                row.slug,
                row.description,
                row.category,
                row.weight,
                row.price,
                row.stock,
            ) {
                Ok(command) => command,
                Err(e) => {
                    debug!(row = index, error = %e, "Import row failed validation");
                    skipped += 1;
                    continue;
                }
            };

            match self.create_product.execute(command).await {
                Ok(product) => created.push(product),
                Err(CreateProductError::SlugTaken) => {
                    debug!(row = index, "Import row skipped on slug collision");
                    skipped += 1;
                }
                Err(CreateProductError::RepositoryError(e)) => {
                    return Err(ImportProductsError::RepositoryError(e));
                }
            }
        }

        Ok(ImportSummary { created, skipped })
    }
}
