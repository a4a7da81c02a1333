use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::domain::Product;
use crate::catalog::application::ports::outgoing::{
    NewProduct, ProductPatch, ProductRepository, ProductRepositoryError,
};

use super::sea_orm_entity::products::{
    ActiveModel as ProductActiveModel, Entity as Products, Model as ProductModel,
};

#[derive(Debug, Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_error(err: DbErr) -> ProductRepositoryError {
        let err_str = err.to_string();
        if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
            return ProductRepositoryError::SlugTaken;
        }
        ProductRepositoryError::DatabaseError(err_str)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(&self, data: NewProduct) -> Result<Product, ProductRepositoryError> {
        let active = ProductActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            category: Set(data.category),
            weight: Set(data.weight),
            price: Set(data.price),
            stock: Set(data.stock),
            is_deleted: Set(false),
            created_at: Set(Utc::now().into()),
        };

        let inserted: ProductModel = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(inserted.to_domain())
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        patch: ProductPatch,
    ) -> Result<Product, ProductRepositoryError> {
        let existing = Products::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_error)?
            .ok_or(ProductRepositoryError::ProductNotFound)?;

        let mut active: ProductActiveModel = existing.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(category) = patch.category {
            active.category = Set(Some(category));
        }
        if let Some(weight) = patch.weight {
            active.weight = Set(Some(weight));
        }
        if let Some(price) = patch.price {
            active.price = Set(price);
        }
        if let Some(stock) = patch.stock {
            active.stock = Set(stock);
        }

        let updated: ProductModel = active
            .update(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(updated.to_domain())
    }

    async fn soft_delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError> {
        let existing = Products::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_error)?
            .ok_or(ProductRepositoryError::ProductNotFound)?;

        if existing.is_deleted {
            // Already hidden; nothing to write.
            return Ok(());
        }

        let mut active: ProductActiveModel = existing.into();
        active.is_deleted = Set(true);
        active.update(&*self.db).await.map_err(Self::map_db_error)?;

        Ok(())
    }
}
