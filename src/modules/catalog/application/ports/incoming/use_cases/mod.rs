pub mod create_product;
pub mod get_product;
pub mod import_products;
pub mod list_products;
pub mod soft_delete_product;
pub mod update_product;

pub use create_product::{
    CreateProductCommand, CreateProductCommandError, CreateProductError, CreateProductUseCase,
};
pub use get_product::{GetProductError, GetProductUseCase};
pub use import_products::{ImportProductsError, ImportProductsUseCase, ImportSummary};
pub use list_products::{ListProductsError, ListProductsUseCase, ProductListQuery};
pub use soft_delete_product::{SoftDeleteProductError, SoftDeleteProductUseCase};
pub use update_product::{
    UpdateProductCommand, UpdateProductCommandError, UpdateProductError, UpdateProductUseCase,
};
