//! # Shop Service
//!
//! A small shop backend: accounts with JWT sessions, an item catalog and
//! per-user carts, persisted to a single JSON snapshot file.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **application**: Business logic services
//! - **infrastructure**: External concerns (JSON file store, crypto)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export store types for easy access
pub use infrastructure::JsonFileStore;

// Re-export API router
pub use interfaces::http::create_api_router;
