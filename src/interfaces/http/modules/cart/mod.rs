//! Cart module — per-user cart reads and line mutations

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
