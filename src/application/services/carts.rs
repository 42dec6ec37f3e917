//! Cart business logic

use std::sync::Arc;

use crate::domain::{Cart, DomainError, DomainResult, Store};

/// Service for per-user cart operations.
///
/// Callers pass the user id taken from the verified token, never from
/// client input, so a cart can only ever be touched by its owner.
pub struct CartService {
    store: Arc<dyn Store>,
}

/// Map a requested quantity onto the cart invariant: at least 1, and
/// saturating at `u32::MAX` rather than truncating.
fn clamp_qty(qty: i64) -> u32 {
    u32::try_from(qty).unwrap_or(u32::MAX).max(1)
}

impl CartService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get(&self, user_id: &str) -> DomainResult<Cart> {
        self.store.get_cart(user_id).await
    }

    /// Add an item to the cart, accumulating quantity onto an existing line.
    ///
    /// Quantities below 1 are raised to 1 to keep the cart invariant; no
    /// policy upper bound, but quantities saturate at the line capacity.
    pub async fn add_item(&self, user_id: &str, item_id: &str, qty: i64) -> DomainResult<Cart> {
        if self.store.get_item(item_id).await?.is_none() {
            return Err(DomainError::NotFound("Item not found".to_string()));
        }

        let mut cart = self.store.get_cart(user_id).await?;
        cart.add(item_id, clamp_qty(qty));
        self.store.save_cart(cart).await
    }

    /// Set the quantity of an existing line, clamped to a minimum of 1
    /// (requests for 0 or negative are raised, not rejected).
    pub async fn set_quantity(&self, user_id: &str, item_id: &str, qty: i64) -> DomainResult<Cart> {
        let mut cart = self.store.get_cart(user_id).await?;
        let line = cart
            .line_mut(item_id)
            .ok_or_else(|| DomainError::NotFound("Not in cart".to_string()))?;
        line.qty = clamp_qty(qty);
        self.store.save_cart(cart).await
    }

    /// Remove a line. Removing an absent item is not an error.
    pub async fn remove_item(&self, user_id: &str, item_id: &str) -> DomainResult<Cart> {
        let mut cart = self.store.get_cart(user_id).await?;
        cart.remove(item_id);
        self.store.save_cart(cart).await
    }
}
