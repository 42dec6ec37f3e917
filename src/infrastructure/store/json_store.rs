//! JSON-file-backed store implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::Snapshot;
use crate::domain::{Cart, DomainError, DomainResult, Item, ItemFilter, ItemPatch, Store, User};

/// In-memory indexed state, rebuilt from the snapshot on open.
///
/// `IndexMap` keeps insertion order, so unfiltered listings come back in
/// the order records were created. The email index is the single
/// authoritative source for case-insensitive email uniqueness.
#[derive(Debug, Default)]
struct State {
    users: IndexMap<String, User>,
    items: IndexMap<String, Item>,
    carts: IndexMap<String, Cart>,
    /// lowercase email -> user id
    email_index: HashMap<String, String>,
}

impl State {
    fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut state = Self::default();
        for user in snapshot.users {
            state.email_index
                .insert(user.email.to_lowercase(), user.id.clone());
            state.users.insert(user.id.clone(), user);
        }
        for item in snapshot.items {
            state.items.insert(item.id.clone(), item);
        }
        for cart in snapshot.carts {
            state.carts.insert(cart.user_id.clone(), cart);
        }
        state
    }

    fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            users: self.users.values().cloned().collect(),
            items: self.items.values().cloned().collect(),
            carts: self.carts.values().cloned().collect(),
        }
    }
}

/// Store backed by a single JSON file.
///
/// All collections live in memory behind one coarse lock; every mutation
/// rewrites the full snapshot to disk before the lock is released. That
/// serializes writers at snapshot granularity, which is the contract this
/// single-process store promises. It is not safe against a second process
/// writing the same file.
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<State>,
}

impl JsonFileStore {
    /// Open the store, loading the snapshot from `path`.
    ///
    /// A missing or unreadable/corrupt file yields an empty store rather
    /// than an error: availability over strict integrity for this
    /// best-effort flat-file design.
    pub async fn open(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DomainError::Internal(e.to_string()))?;
            }
        }

        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("Corrupt store file {}: {}. Starting empty.", path.display(), e);
                    Snapshot::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Snapshot::default(),
            Err(e) => {
                warn!("Cannot read store file {}: {}. Starting empty.", path.display(), e);
                Snapshot::default()
            }
        };

        info!(
            "Store opened from {} ({} users, {} items, {} carts)",
            path.display(),
            snapshot.users.len(),
            snapshot.items.len(),
            snapshot.carts.len()
        );

        let store = Self {
            path,
            state: RwLock::new(State::from_snapshot(snapshot)),
        };

        // Make sure the backing file exists from the start
        {
            let state = store.state.read().await;
            store.flush(&state).await?;
        }

        Ok(store)
    }

    /// Write the full snapshot to disk. Called with the write lock held so
    /// flushed snapshots always reflect a single consistent state.
    async fn flush(&self, state: &State) -> DomainResult<()> {
        let json = serde_json::to_string_pretty(&state.to_snapshot())
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn upsert_user(&self, user: User) -> DomainResult<User> {
        let key = user.email.to_lowercase();
        let mut state = self.state.write().await;
        // The index is authoritative: uniqueness is enforced here, under the
        // same lock acquisition that performs the write, so two racing
        // signups cannot both slip past a service-level pre-check.
        if let Some(owner) = state.email_index.get(&key) {
            if owner != &user.id {
                return Err(DomainError::Conflict("Email already used".to_string()));
            }
        }
        if let Some(previous) = state.users.get(&user.id) {
            // Keep the email index in step when a replace changes the email
            if !previous.email.eq_ignore_ascii_case(&user.email) {
                let old_key = previous.email.to_lowercase();
                state.email_index.remove(&old_key);
            }
        }
        state.email_index.insert(key, user.id.clone());
        state.users.insert(user.id.clone(), user.clone());
        self.flush(&state).await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        let id = state.email_index.get(&email.to_lowercase());
        Ok(id.and_then(|id| state.users.get(id)).cloned())
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(id).cloned())
    }

    async fn list_items(&self, filter: &ItemFilter) -> DomainResult<Vec<Item>> {
        let state = self.state.read().await;
        Ok(state
            .items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn get_item(&self, id: &str) -> DomainResult<Option<Item>> {
        let state = self.state.read().await;
        Ok(state.items.get(id).cloned())
    }

    async fn create_item(&self, item: Item) -> DomainResult<Item> {
        let mut state = self.state.write().await;
        state.items.insert(item.id.clone(), item.clone());
        self.flush(&state).await?;
        Ok(item)
    }

    async fn update_item(&self, id: &str, patch: ItemPatch) -> DomainResult<Option<Item>> {
        let mut state = self.state.write().await;
        let updated = match state.items.get_mut(id) {
            Some(item) => {
                patch.apply(item);
                item.id = id.to_string();
                item.clone()
            }
            None => return Ok(None),
        };
        self.flush(&state).await?;
        Ok(Some(updated))
    }

    async fn delete_item(&self, id: &str) -> DomainResult<bool> {
        let mut state = self.state.write().await;
        // shift_remove keeps the remaining items in insertion order
        if state.items.shift_remove(id).is_none() {
            return Ok(false);
        }
        self.flush(&state).await?;
        Ok(true)
    }

    async fn get_cart(&self, user_id: &str) -> DomainResult<Cart> {
        let mut state = self.state.write().await;
        if let Some(cart) = state.carts.get(user_id) {
            return Ok(cart.clone());
        }
        let cart = Cart::empty(user_id);
        state.carts.insert(user_id.to_string(), cart.clone());
        self.flush(&state).await?;
        Ok(cart)
    }

    async fn save_cart(&self, cart: Cart) -> DomainResult<Cart> {
        let mut state = self.state.write().await;
        state.carts.insert(cart.user_id.clone(), cart.clone());
        self.flush(&state).await?;
        Ok(cart)
    }
}
