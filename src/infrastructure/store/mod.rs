//! Flat-file JSON persistence

pub mod json_store;
pub mod snapshot;

pub use json_store::JsonFileStore;
pub use snapshot::Snapshot;
