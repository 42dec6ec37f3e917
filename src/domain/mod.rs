pub mod cart;
pub mod error;
pub mod item;
pub mod store;
pub mod user;

// Re-export commonly used types
pub use cart::{Cart, CartLine};
pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemFilter, ItemPatch};
pub use store::Store;
pub use user::{PublicUser, User};
