pub mod order_query;
pub mod order_repository;

pub use order_query::{OrderQuery, OrderQueryError, OrderScope};
pub use order_repository::{NewOrder, NewOrderItem, OrderRepository, OrderRepositoryError};
