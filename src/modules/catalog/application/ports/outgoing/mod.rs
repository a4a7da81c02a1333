pub mod product_query;
pub mod product_repository;

pub use product_query::{ProductFilter, ProductOrdering, ProductQuery, ProductQueryError};
pub use product_repository::{
    NewProduct, ProductPatch, ProductRepository, ProductRepositoryError,
};
