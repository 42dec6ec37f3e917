//! Infrastructure layer: crypto utilities and the JSON file store

pub mod crypto;
pub mod store;

pub use crypto::JwtConfig;
pub use store::JsonFileStore;
