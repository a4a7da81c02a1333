use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::catalog::adapter::outgoing::sea_orm_entity::products;
use crate::orders::application::domain::{Order, OrderItem, OrderStatus};

use super::sea_orm_entity::{order_items, orders};

/// Assembles full `Order` views from raw rows: batch-loads the items, the
/// product names and the owner emails in three queries regardless of how
/// many orders are being hydrated.
pub(super) async fn load_orders<C: ConnectionTrait>(
    conn: &C,
    order_models: Vec<orders::Model>,
) -> Result<Vec<Order>, DbErr> {
    if order_models.is_empty() {
        return Ok(vec![]);
    }

    let order_ids: Vec<Uuid> = order_models.iter().map(|o| o.id).collect();

    let item_models = order_items::Entity::find()
        .filter(order_items::Column::OrderId.is_in(order_ids))
        .all(conn)
        .await?;

    let product_ids: Vec<Uuid> = item_models.iter().filter_map(|i| i.product_id).collect();
    let product_names: HashMap<Uuid, String> = if product_ids.is_empty() {
        HashMap::new()
    } else {
        products::Entity::find()
            .filter(products::Column::Id.is_in(product_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect()
    };

    let user_ids: Vec<Uuid> = order_models.iter().filter_map(|o| o.user_id).collect();
    let user_emails: HashMap<Uuid, String> = if user_ids.is_empty() {
        HashMap::new()
    } else {
        users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|u| (u.id, u.email))
            .collect()
    };

    let mut items_by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
    for item in item_models {
        items_by_order
            .entry(item.order_id)
            .or_default()
            .push(OrderItem {
                id: item.id,
                product_id: item.product_id,
                product_name: item
                    .product_id
                    .and_then(|id| product_names.get(&id).cloned()),
                quantity: item.quantity,
                price: item.price,
            });
    }

    Ok(order_models
        .into_iter()
        .map(|model| {
            let user_email = model
                .user_id
                .and_then(|id| user_emails.get(&id).cloned());
            Order {
                id: model.id,
                user_id: model.user_id,
                user_email,
                // Stored statuses come from the same enum; anything foreign
                // reads as Pending rather than poisoning the whole listing.
                status: model.status.parse().unwrap_or(OrderStatus::Pending),
                total: model.total,
                shipping_address: model.shipping_address,
                admin_notes: model.admin_notes,
                created_at: model.created_at.into(),
                items: items_by_order.remove(&model.id).unwrap_or_default(),
            }
        })
        .collect())
}

/// Single-order variant of [`load_orders`].
pub(super) async fn load_order<C: ConnectionTrait>(
    conn: &C,
    order_model: orders::Model,
) -> Result<Order, DbErr> {
    let mut orders = load_orders(conn, vec![order_model]).await?;
    // One in, one out.
    Ok(orders.remove(0))
}
