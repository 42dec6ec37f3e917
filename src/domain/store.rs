//! Store trait definitions

use async_trait::async_trait;

use super::{Cart, DomainResult, Item, ItemFilter, ItemPatch, User};

/// Durable record of users, items and carts.
///
/// The store is the aggregate root: services hold no state of their own and
/// every operation here is atomic with respect to the others.
#[async_trait]
pub trait Store: Send + Sync {
    // User operations
    /// Insert or replace by id. Fails with `Conflict` when the email is
    /// already held (case-insensitively) by a different user.
    async fn upsert_user(&self, user: User) -> DomainResult<User>;
    /// Case-insensitive exact match on email
    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    // Item operations
    /// No filter → full list in insertion order
    async fn list_items(&self, filter: &ItemFilter) -> DomainResult<Vec<Item>>;
    async fn get_item(&self, id: &str) -> DomainResult<Option<Item>>;
    async fn create_item(&self, item: Item) -> DomainResult<Item>;
    /// Merges patch fields over the existing record; `None` if the id is unknown
    async fn update_item(&self, id: &str, patch: ItemPatch) -> DomainResult<Option<Item>>;
    /// Returns whether a record was removed
    async fn delete_item(&self, id: &str) -> DomainResult<bool>;

    // Cart operations
    /// Returns the existing cart or creates-and-persists an empty one
    async fn get_cart(&self, user_id: &str) -> DomainResult<Cart>;
    async fn save_cart(&self, cart: Cart) -> DomainResult<Cart>;
}
