//! Application services

pub mod accounts;
pub mod carts;
pub mod catalog;

pub use accounts::AccountService;
pub use carts::CartService;
pub use catalog::{CatalogService, NewItem};
