//! Domain models
//!
//! Filter and sort options for the inventory and supplier lists, together
//! with the pure functions that apply them.

pub mod inventory_filter;
pub mod sort;
pub mod supplier_filter;

pub use inventory_filter::{apply_inventory_filter, InventoryFilter, InventorySortKey};
pub use sort::SortDirection;
pub use supplier_filter::{
    apply_supplier_filter, SupplierFilter, SupplierSortKey, SupplierStatusFilter,
};
