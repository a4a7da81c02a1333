pub mod export_orders;
pub mod list_orders;
pub mod place_order;
pub mod set_order_notes;
pub mod set_order_status;

pub use export_orders::{ExportOrdersError, ExportOrdersUseCase};
pub use list_orders::{ListOrdersError, ListOrdersUseCase};
pub use place_order::{
    OrderItemRequest, PlaceOrderCommand, PlaceOrderCommandError, PlaceOrderError,
    PlaceOrderUseCase,
};
pub use set_order_notes::{SetOrderNotesError, SetOrderNotesUseCase};
pub use set_order_status::{SetOrderStatusError, SetOrderStatusUseCase};
