pub mod create_product_service;
pub mod get_product_service;
pub mod import_products_service;
pub mod list_products_service;
pub mod soft_delete_product_service;
pub mod update_product_service;

pub use create_product_service::CreateProductService;
pub use get_product_service::GetProductService;
pub use import_products_service::ImportProductsService;
pub use list_products_service::ListProductsService;
pub use soft_delete_product_service::SoftDeleteProductService;
pub use update_product_service::UpdateProductService;
