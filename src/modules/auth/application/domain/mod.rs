pub mod entities;

pub use entities::{Role, User};
