use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::adapter::outgoing::sea_orm_entity::products;
use crate::orders::application::domain::{Order, OrderStatus};
use crate::orders::application::ports::outgoing::{
    NewOrder, OrderRepository, OrderRepositoryError,
};

use super::hydrate::load_order;
use super::sea_orm_entity::{order_items, orders};

#[derive(Debug, Clone)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_error(err: DbErr) -> OrderRepositoryError {
        OrderRepositoryError::DatabaseError(err.to_string())
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn place_order(&self, data: NewOrder) -> Result<Order, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_error)?;

        let order_id = Uuid::new_v4();
        let mut total = Decimal::ZERO;
        let mut item_actives = Vec::with_capacity(data.items.len());

        for item in &data.items {
            let product = products::Entity::find_by_id(item.product_id)
                .one(&txn)
                .await
                .map_err(Self::map_db_error)?
                .ok_or(OrderRepositoryError::ProductNotFound(item.product_id))?;

            // Price captured now; later catalog edits leave this line alone.
            let price = product.price;
            total += price * Decimal::from(item.quantity);

            // Decrement only when there is enough on hand. Short stock does
            // not block the sale; the line is created either way.
            if product.stock >= item.quantity {
                let new_stock = product.stock - item.quantity;
                let mut product_active: products::ActiveModel = product.into();
                product_active.stock = Set(new_stock);
                product_active
                    .update(&txn)
                    .await
                    .map_err(Self::map_db_error)?;
            }

            item_actives.push(order_items::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order_id),
                product_id: Set(Some(item.product_id)),
                quantity: Set(item.quantity),
                price: Set(price),
            });
        }

        let order_model = orders::ActiveModel {
            id: Set(order_id),
            user_id: Set(Some(data.user_id)),
            total: Set(total),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now().into()),
            shipping_address: Set(data.shipping_address),
            admin_notes: Set(String::new()),
        }
        .insert(&txn)
        .await
        .map_err(Self::map_db_error)?;

        for item_active in item_actives {
            item_active.insert(&txn).await.map_err(Self::map_db_error)?;
        }

        txn.commit().await.map_err(Self::map_db_error)?;

        load_order(&*self.db, order_model)
            .await
            .map_err(Self::map_db_error)
    }

    async fn set_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderRepositoryError> {
        let existing = orders::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_error)?
            .ok_or(OrderRepositoryError::OrderNotFound)?;

        let mut active: orders::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());

        let updated = active.update(&*self.db).await.map_err(Self::map_db_error)?;

        load_order(&*self.db, updated)
            .await
            .map_err(Self::map_db_error)
    }

    async fn set_notes(
        &self,
        order_id: Uuid,
        notes: String,
    ) -> Result<Order, OrderRepositoryError> {
        let existing = orders::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_error)?
            .ok_or(OrderRepositoryError::OrderNotFound)?;

        let mut active: orders::ActiveModel = existing.into();
        active.admin_notes = Set(notes);

        let updated = active.update(&*self.db).await.map_err(Self::map_db_error)?;

        load_order(&*self.db, updated)
            .await
            .map_err(Self::map_db_error)
    }
}
