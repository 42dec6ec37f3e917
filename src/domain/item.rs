//! Catalog item domain entity

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: String,
    pub title: String,
    /// Free-form category, defaults to "Misc" on creation
    pub category: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for an item. Absent fields keep their current value;
/// the id is immutable.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl ItemPatch {
    /// Merge the patch over an existing item, field by field.
    pub fn apply(self, item: &mut Item) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(image) = self.image {
            item.image = Some(image);
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
    }
}

/// Catalog query filter; all criteria optional, composed with logical AND.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring match on title
    pub q: Option<String>,
    /// Case-insensitive exact match on category
    pub category: Option<String>,
    /// Inclusive lower bound on price
    pub min: Option<f64>,
    /// Inclusive upper bound on price
    pub max: Option<f64>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(q) = &self.q {
            if !item.title.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !item.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min {
            if item.price < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if item.price > max {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, category: &str, price: f64) -> Item {
        Item {
            id: "i1".to_string(),
            title: title.to_string(),
            category: category.to_string(),
            price,
            image: None,
            description: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ItemFilter::default().matches(&item("Widget", "Home", 200.0)));
    }

    #[test]
    fn title_search_is_case_insensitive_substring() {
        let filter = ItemFilter {
            q: Some("wid".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&item("Super Widget", "Home", 200.0)));
        assert!(!filter.matches(&item("Gadget", "Home", 200.0)));
    }

    #[test]
    fn category_match_is_case_insensitive_exact() {
        let filter = ItemFilter {
            category: Some("home".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&item("Widget", "Home", 200.0)));
        assert!(!filter.matches(&item("Widget", "Home Decor", 200.0)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filter = ItemFilter {
            min: Some(200.0),
            max: Some(200.0),
            ..Default::default()
        };
        assert!(filter.matches(&item("Widget", "Home", 200.0)));
        assert!(!filter.matches(&item("Widget", "Home", 199.99)));
        assert!(!filter.matches(&item("Widget", "Home", 200.01)));
    }

    #[test]
    fn criteria_compose_with_and() {
        let filter = ItemFilter {
            q: Some("widget".to_string()),
            category: Some("Sports".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&item("Widget", "Home", 200.0)));
        assert!(filter.matches(&item("Widget", "Sports", 200.0)));
    }

    #[test]
    fn patch_merges_and_keeps_absent_fields() {
        let mut it = item("Widget", "Home", 200.0);
        ItemPatch {
            price: Some(150.0),
            ..Default::default()
        }
        .apply(&mut it);
        assert_eq!(it.price, 150.0);
        assert_eq!(it.title, "Widget");
        assert_eq!(it.category, "Home");
    }
}
