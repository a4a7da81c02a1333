pub mod admin_list_orders;
pub mod export_orders;
pub mod list_orders;
pub mod place_order;
pub mod set_order_notes;
pub mod set_order_status;

pub use admin_list_orders::admin_list_orders_handler;
pub use export_orders::{export_orders_handler, ExportOrdersRequestDto};
pub use list_orders::list_orders_handler;
pub use place_order::{place_order_handler, OrderItemDto, PlaceOrderRequestDto};
pub use set_order_notes::{set_order_notes_handler, SetOrderNotesRequestDto};
pub use set_order_status::{set_order_status_handler, SetOrderStatusRequestDto};
