//! Catalog DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::NewItem;
use crate::domain::ItemFilter;

/// Catalog list query. Bounds arrive as strings so that non-numeric
/// values can be ignored instead of failing the whole request.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListItemsQuery {
    /// Case-insensitive substring match on title
    pub q: Option<String>,
    /// Case-insensitive exact category match
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min: Option<String>,
    /// Inclusive upper price bound
    pub max: Option<String>,
}

impl ListItemsQuery {
    pub fn into_filter(self) -> ItemFilter {
        let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());
        ItemFilter {
            q: non_empty(self.q),
            category: non_empty(self.category),
            min: self.min.and_then(|v| v.parse().ok()),
            max: self.max.and_then(|v| v.parse().ok()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(request: CreateItemRequest) -> Self {
        NewItem {
            title: request.title,
            category: request.category,
            price: request.price,
            image: request.image,
            description: request.description,
        }
    }
}

/// Body of a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteItemResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_bounds_are_ignored() {
        let query = ListItemsQuery {
            min: Some("abc".to_string()),
            max: Some("150.5".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter();
        assert_eq!(filter.min, None);
        assert_eq!(filter.max, Some(150.5));
    }

    #[test]
    fn empty_strings_mean_no_criterion() {
        let query = ListItemsQuery {
            q: Some(String::new()),
            category: Some(String::new()),
            ..Default::default()
        };
        let filter = query.into_filter();
        assert_eq!(filter.q, None);
        assert_eq!(filter.category, None);
    }
}
