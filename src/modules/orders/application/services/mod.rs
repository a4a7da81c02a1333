pub mod export_orders_service;
pub mod list_orders_service;
pub mod place_order_service;
pub mod set_order_notes_service;
pub mod set_order_status_service;

pub use export_orders_service::ExportOrdersService;
pub use list_orders_service::ListOrdersService;
pub use place_order_service::PlaceOrderService;
pub use set_order_notes_service::SetOrderNotesService;
pub use set_order_status_service::SetOrderStatusService;
