use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::application::domain::{Order, OrderStatus};
use crate::orders::application::ports::incoming::use_cases::{
    SetOrderStatusError, SetOrderStatusUseCase,
};
use crate::orders::application::ports::outgoing::{OrderRepository, OrderRepositoryError};

#[derive(Clone)]
pub struct SetOrderStatusService<R>
where
    R: OrderRepository,
{
    repository: R,
}

impl<R> SetOrderStatusService<R>
where
    R: OrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetOrderStatusUseCase for SetOrderStatusService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, SetOrderStatusError> {
        self.repository
            .set_status(order_id, status)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::OrderNotFound => SetOrderStatusError::OrderNotFound,
                other => SetOrderStatusError::RepositoryError(other.to_string()),
            })
    }
}
