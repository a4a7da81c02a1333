pub mod admin_list_products;
pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod import_products;
pub mod list_products;
pub mod update_product;

pub use admin_list_products::admin_list_products_handler;
pub use create_product::{create_product_handler, CreateProductRequestDto};
pub use delete_product::{admin_delete_product_handler, delete_product_handler};
pub use get_product::{admin_get_product_handler, get_product_handler};
pub use import_products::{import_products_handler, ImportProductsRequestDto};
pub use list_products::list_products_handler;
pub use update_product::{
    admin_update_product_handler, update_product_handler, UpdateProductRequestDto,
};
