pub mod entities;
pub mod slug;

pub use entities::Product;
pub use slug::slugify;
