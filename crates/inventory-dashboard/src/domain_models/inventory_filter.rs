//! Inventory filter model
//!
//! Filter and sort options for the inventory list, and the engine that
//! applies them.

use super::sort::{compare_text, contains_ignore_case, SortDirection};
use inventory_client::InventoryItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column the inventory list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InventorySortKey {
    Name,
    Quantity,
    UnitPrice,
    LastUpdated,
}

impl InventorySortKey {
    pub fn label(&self) -> &str {
        match self {
            Self::Name => "Name",
            Self::Quantity => "Quantity",
            Self::UnitPrice => "Unit price",
            Self::LastUpdated => "Last updated",
        }
    }

    /// Ascending comparison of two items on this key
    fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            Self::Name => compare_text(&a.name, &b.name),
            Self::Quantity => a.quantity.cmp(&b.quantity),
            Self::UnitPrice => a.unit_price.total_cmp(&b.unit_price),
            Self::LastUpdated => a.last_updated.cmp(&b.last_updated),
        }
    }
}

/// Options for narrowing and ordering the inventory list.
///
/// Every option is independent; unset options do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryFilter {
    /// Case-insensitive substring of name, SKU or description
    pub search: Option<String>,
    /// Keep items whose category is one of these (empty = any)
    pub categories: Vec<String>,
    /// Inclusive lower bound on quantity
    pub min_quantity: Option<u32>,
    /// Inclusive upper bound on quantity
    pub max_quantity: Option<u32>,
    /// Exact location match
    pub location: Option<String>,
    pub sort_by: Option<InventorySortKey>,
    pub sort_direction: SortDirection,
}

impl InventoryFilter {
    /// Filter with no constraints, sorted by `key` ascending
    pub fn sorted_by(key: InventorySortKey) -> Self {
        Self {
            sort_by: Some(key),
            ..Self::default()
        }
    }

    /// Check whether an item passes every active constraint
    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.matches_search(item)
            && self.matches_category(item)
            && self.min_quantity.is_none_or(|min| item.quantity >= min)
            && self.max_quantity.is_none_or(|max| item.quantity <= max)
            && self
                .location
                .as_deref()
                .filter(|l| !l.is_empty())
                .is_none_or(|location| item.location == location)
    }

    fn matches_search(&self, item: &InventoryItem) -> bool {
        let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = search.to_lowercase();
        contains_ignore_case(&item.name, &needle)
            || contains_ignore_case(&item.sku, &needle)
            || item
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, &needle))
    }

    fn matches_category(&self, item: &InventoryItem) -> bool {
        self.categories.is_empty() || self.categories.contains(&item.category)
    }

    /// Whether any filtering option (not sorting) is set
    pub fn is_narrowing(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || !self.categories.is_empty()
            || self.min_quantity.is_some()
            || self.max_quantity.is_some()
            || self.location.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// Apply `filter` to `items`, returning the matching items in display order.
///
/// The sort is stable, so items with equal keys keep their collection order.
pub fn apply_inventory_filter(items: &[InventoryItem], filter: &InventoryFilter) -> Vec<InventoryItem> {
    let mut result: Vec<InventoryItem> = items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();

    if let Some(key) = filter.sort_by {
        result.sort_by(|a, b| filter.sort_direction.apply(key.compare(a, b)));
    }

    result
}
