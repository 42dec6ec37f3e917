//! HTTP API modules, one per resource

pub mod auth;
pub mod cart;
pub mod health;
pub mod items;
