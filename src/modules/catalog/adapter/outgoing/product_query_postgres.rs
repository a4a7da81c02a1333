use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::domain::Product;
use crate::catalog::application::ports::outgoing::{
    ProductFilter, ProductOrdering, ProductQuery, ProductQueryError,
};

use super::sea_orm_entity::products::{Column, Entity as Products};

#[derive(Debug, Clone)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductQueryError> {
        let mut select = Products::find();

        if !filter.include_deleted {
            select = select.filter(Column::IsDeleted.eq(false));
        }
        if let Some(category) = filter.category {
            select = select.filter(Column::Category.eq(category));
        }
        if let Some(search) = filter.search {
            let pattern = format!("%{search}%");
            select = select.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(pattern.clone()))
                    .add(Expr::col(Column::Slug).ilike(pattern.clone()))
                    .add(Expr::col(Column::Category).ilike(pattern.clone()))
                    .add(Expr::col(Column::Description).ilike(pattern)),
            );
        }

        select = match filter.ordering {
            ProductOrdering::PriceAsc => select.order_by_asc(Column::Price),
            ProductOrdering::PriceDesc => select.order_by_desc(Column::Price),
            ProductOrdering::CreatedAtAsc => select.order_by_asc(Column::CreatedAt),
            ProductOrdering::CreatedAtDesc => select.order_by_desc(Column::CreatedAt),
        };

        let models = select
            .all(&*self.db)
            .await
            .map_err(|e| ProductQueryError::QueryError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_by_id(
        &self,
        product_id: Uuid,
        include_deleted: bool,
    ) -> Result<Option<Product>, ProductQueryError> {
        let mut select = Products::find_by_id(product_id);
        if !include_deleted {
            select = select.filter(Column::IsDeleted.eq(false));
        }

        let model = select
            .one(&*self.db)
            .await
            .map_err(|e| ProductQueryError::QueryError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ProductQueryError> {
        let model = Products::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(|e| ProductQueryError::QueryError(e.to_string()))?;

        Ok(model.is_some())
    }
}
