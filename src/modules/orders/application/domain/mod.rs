pub mod entities;
pub mod export;
pub mod order_status;

pub use entities::{Order, OrderItem};
pub use export::orders_to_csv;
pub use order_status::{InvalidStatus, OrderStatus};
