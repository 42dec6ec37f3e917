//! Shopping cart domain entity

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One (item, quantity) pair within a cart.
///
/// Invariant: `qty >= 1`, and a cart holds at most one line per item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: String,
    pub qty: u32,
}

/// Per-user cart, keyed by the owning user's id (1:1).
///
/// Lines keep insertion order. Carts are created lazily on first access
/// and never deleted; an empty cart persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: String,
    pub items: Vec<CartLine>,
}

impl Cart {
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }

    pub fn line_mut(&mut self, item_id: &str) -> Option<&mut CartLine> {
        self.items.iter_mut().find(|l| l.item_id == item_id)
    }

    /// Accumulate quantity onto an existing line, or append a new one.
    /// Accumulation saturates instead of wrapping past the line capacity.
    pub fn add(&mut self, item_id: &str, qty: u32) {
        match self.line_mut(item_id) {
            Some(line) => line.qty = line.qty.saturating_add(qty),
            None => self.items.push(CartLine {
                item_id: item_id.to_string(),
                qty,
            }),
        }
    }

    /// Remove a line if present. Removing an absent line is a no-op.
    pub fn remove(&mut self, item_id: &str) {
        self.items.retain(|l| l.item_id != item_id);
    }
}
