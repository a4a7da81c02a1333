use async_trait::async_trait;

use crate::orders::application::domain::Order;
use crate::orders::application::ports::incoming::use_cases::{
    PlaceOrderCommand, PlaceOrderError, PlaceOrderUseCase,
};
use crate::orders::application::ports::outgoing::{
    NewOrder, NewOrderItem, OrderRepository, OrderRepositoryError,
};

#[derive(Clone)]
pub struct PlaceOrderService<R>
where
    R: OrderRepository,
{
    repository: R,
}

impl<R> PlaceOrderService<R>
where
    R: OrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PlaceOrderUseCase for PlaceOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(&self, command: PlaceOrderCommand) -> Result<Order, PlaceOrderError> {
        let (user_id, shipping_address, items) = command.into_parts();

        self.repository
            .place_order(NewOrder {
                user_id,
                shipping_address,
                items: items
                    .into_iter()
                    .map(|item| NewOrderItem {
                        product_id: item.product_id,
                        quantity: item.quantity,
                    })
                    .collect(),
            })
            .await
            .map_err(|e| match e {
                OrderRepositoryError::ProductNotFound(id) => PlaceOrderError::ProductNotFound(id),
                other => PlaceOrderError::RepositoryError(other.to_string()),
            })
    }
}
