//! Inventory State
//!
//! Full collection, the filtered view shown to the user, and the flags of the
//! last operation.

use crate::domain_models::{InventoryFilter, InventorySortKey};
use inventory_client::{InventoryItem, InventoryStats};

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryState {
    pub items: Vec<InventoryItem>,
    pub filtered_items: Vec<InventoryItem>,
    /// Item opened for viewing or editing
    pub current_item: Option<InventoryItem>,
    pub is_loading: bool,
    /// Message of the last failed operation
    pub error: Option<String>,
    pub filter: InventoryFilter,
    pub stats: Option<InventoryStats>,
}

impl InventoryState {
    pub fn find(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filtered_items: Vec::new(),
            current_item: None,
            is_loading: false,
            error: None,
            filter: InventoryFilter::sorted_by(InventorySortKey::Name),
            stats: None,
        }
    }
}
