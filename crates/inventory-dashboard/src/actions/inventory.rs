//! Actions for the inventory list.

use crate::domain_models::InventoryFilter;
use inventory_client::{InventoryItem, InventoryStats};

/// State transitions of the inventory store, handled by the inventory reducer
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Replace the full collection and the filtered view (filter is not reapplied)
    SetItems(Vec<InventoryItem>),

    /// Replace only the filtered view
    SetFilteredItems(Vec<InventoryItem>),

    /// Focus a single item, or clear the focus
    SetCurrentItem(Option<InventoryItem>),

    SetLoading(bool),
    SetError(Option<String>),
    SetFilter(InventoryFilter),
    SetStats(InventoryStats),

    /// Append a newly created item
    AddItem(InventoryItem),

    /// Replace the item with the same id
    UpdateItem(InventoryItem),

    /// Remove the item with this id
    DeleteItem(String),
}

/// High-level inventory operations, handled by the inventory middleware.
///
/// Commands never reach the reducer; the middleware turns them into service
/// calls and dispatches [`InventoryAction`]s with the results.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryCommand {
    /// Load the collection and its statistics
    Load,

    /// Store a new filter and recompute the filtered view
    ApplyFilter(InventoryFilter),

    /// Fetch one item and focus it
    FetchItem(String),

    /// Create the item, or update it if its id is already loaded
    SaveItem(InventoryItem),

    DeleteItem(String),
}
