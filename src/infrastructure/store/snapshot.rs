//! On-disk snapshot format

use serde::{Deserialize, Serialize};

use crate::domain::{Cart, Item, User};

/// Complete persisted state: `{ "users": [], "items": [], "carts": [] }`.
///
/// Collections are serialized as arrays in insertion order so the backing
/// file stays readable and diffable.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub items: Vec<Item>,
    pub carts: Vec<Cart>,
}
