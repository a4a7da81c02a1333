use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::application::domain::Order;
use crate::orders::application::ports::incoming::use_cases::{
    SetOrderNotesError, SetOrderNotesUseCase,
};
use crate::orders::application::ports::outgoing::{OrderRepository, OrderRepositoryError};

#[derive(Clone)]
pub struct SetOrderNotesService<R>
where
    R: OrderRepository,
{
    repository: R,
}

impl<R> SetOrderNotesService<R>
where
    R: OrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetOrderNotesUseCase for SetOrderNotesService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(&self, order_id: Uuid, notes: String) -> Result<Order, SetOrderNotesError> {
        self.repository
            .set_notes(order_id, notes)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::OrderNotFound => SetOrderNotesError::OrderNotFound,
                other => SetOrderNotesError::RepositoryError(other.to_string()),
            })
    }
}
