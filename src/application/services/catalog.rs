//! Catalog business logic: item CRUD and query filtering

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, Item, ItemFilter, ItemPatch, Store};

/// Input for catalog-create. Fields are optional at this level so the
/// service owns the required-field errors and their messages.
#[derive(Debug, Default)]
pub struct NewItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Service for catalog operations
pub struct CatalogService {
    store: Arc<dyn Store>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// List items matching the filter; public, no authentication.
    pub async fn list(&self, filter: &ItemFilter) -> DomainResult<Vec<Item>> {
        self.store.list_items(filter).await
    }

    pub async fn get(&self, id: &str) -> DomainResult<Item> {
        self.store
            .get_item(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Not found".to_string()))
    }

    pub async fn create(&self, input: NewItem) -> DomainResult<Item> {
        let title = input.title.as_deref().map(str::trim).unwrap_or_default();
        let (title, price) = match (title.is_empty(), input.price) {
            (false, Some(price)) => (title.to_string(), price),
            _ => {
                return Err(DomainError::Validation(
                    "title & price required".to_string(),
                ))
            }
        };

        let item = Item {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            category: input
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "Misc".to_string()),
            price,
            image: input.image,
            description: input.description,
        };

        let item = self.store.create_item(item).await?;
        info!("Item created: {} ({})", item.title, item.id);
        Ok(item)
    }

    pub async fn update(&self, id: &str, patch: ItemPatch) -> DomainResult<Item> {
        self.store
            .update_item(id, patch)
            .await?
            .ok_or_else(|| DomainError::NotFound("Not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        if !self.store.delete_item(id).await? {
            return Err(DomainError::NotFound("Not found".to_string()));
        }
        info!("Item deleted: {}", id);
        Ok(())
    }
}
