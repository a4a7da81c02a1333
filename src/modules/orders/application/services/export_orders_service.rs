use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::application::domain::orders_to_csv;
use crate::orders::application::ports::incoming::use_cases::{
    ExportOrdersError, ExportOrdersUseCase,
};
use crate::orders::application::ports::outgoing::OrderQuery;

#[derive(Clone)]
pub struct ExportOrdersService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> ExportOrdersService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ExportOrdersUseCase for ExportOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, order_ids: Vec<Uuid>) -> Result<String, ExportOrdersError> {
        if order_ids.is_empty() {
            return Err(ExportOrdersError::EmptyOrderIds);
        }

        let orders = self
            .query
            .find_by_ids(&order_ids)
            .await
            .map_err(|e| ExportOrdersError::QueryError(e.to_string()))?;

        Ok(orders_to_csv(&orders))
    }
}
