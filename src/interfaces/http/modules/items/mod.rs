//! Catalog module — item listing, lookup and CRUD

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
