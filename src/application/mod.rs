//! Business logic layer

pub mod services;

pub use services::{AccountService, CartService, CatalogService, NewItem};
