use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::Role;
use crate::orders::application::domain::{Order, OrderStatus};
use crate::orders::application::ports::incoming::use_cases::{ListOrdersError, ListOrdersUseCase};
use crate::orders::application::ports::outgoing::{OrderQuery, OrderScope};

#[derive(Clone)]
pub struct ListOrdersService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> ListOrdersService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListOrdersUseCase for ListOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        role: Role,
        status: Option<OrderStatus>,
        created_date: Option<NaiveDate>,
    ) -> Result<Vec<Order>, ListOrdersError> {
        let scope = if role.is_admin() {
            OrderScope::All
        } else {
            OrderScope::User(user_id)
        };

        self.query
            .list_orders(scope, status, created_date)
            .await
            .map_err(|e| ListOrdersError::QueryError(e.to_string()))
    }
}
