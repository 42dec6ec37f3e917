//! User domain entity

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User account as stored in the snapshot.
///
/// Users are created on signup and never deleted. The password hash is
/// persisted but must never leave the service; all outward-facing code
/// works with [`PublicUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique case-insensitively across the store
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Public projection of a user (id, name, email — never the hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
        }
    }
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}
