use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::orders::application::domain::{Order, OrderStatus};
use crate::orders::application::ports::outgoing::{
    OrderQuery, OrderQueryError, OrderScope,
};

use super::hydrate::load_orders;
use super::sea_orm_entity::orders;

#[derive(Debug, Clone)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn list_orders(
        &self,
        scope: OrderScope,
        status: Option<OrderStatus>,
        created_date: Option<NaiveDate>,
    ) -> Result<Vec<Order>, OrderQueryError> {
        let mut select = orders::Entity::find();

        if let OrderScope::User(user_id) = scope {
            select = select.filter(orders::Column::UserId.eq(user_id));
        }
        if let Some(status) = status {
            select = select.filter(orders::Column::Status.eq(status.as_str()));
        }
        if let Some(date) = created_date {
            // Half-open UTC day range.
            let start = date.and_time(NaiveTime::MIN).and_utc();
            let end = start + Duration::days(1);
            select = select
                .filter(orders::Column::CreatedAt.gte(start))
                .filter(orders::Column::CreatedAt.lt(end));
        }

        let models = select
            .order_by_desc(orders::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| OrderQueryError::QueryError(e.to_string()))?;

        load_orders(&*self.db, models)
            .await
            .map_err(|e| OrderQueryError::QueryError(e.to_string()))
    }

    async fn find_by_ids(&self, order_ids: &[Uuid]) -> Result<Vec<Order>, OrderQueryError> {
        let models = orders::Entity::find()
            .filter(orders::Column::Id.is_in(order_ids.iter().copied()))
            .order_by_desc(orders::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| OrderQueryError::QueryError(e.to_string()))?;

        load_orders(&*self.db, models)
            .await
            .map_err(|e| OrderQueryError::QueryError(e.to_string()))
    }
}
