//! Application State

use super::{InventoryState, SupplierState};

/// Application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub inventory: InventoryState,
    pub suppliers: SupplierState,
}

impl AppState {
    /// Whether any store is waiting for a service call to settle
    pub fn is_busy(&self) -> bool {
        self.inventory.is_loading || self.suppliers.is_loading
    }
}
