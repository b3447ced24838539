//! Actions for the supplier list and supplier details.

use crate::domain_models::SupplierFilter;
use inventory_client::{Supplier, SupplierItemAssociation, SupplierStats};

/// State transitions of the supplier store
#[derive(Debug, Clone, PartialEq)]
pub enum SupplierAction {
    /// Replace the full collection and the filtered view (filter is not reapplied)
    SetSuppliers(Vec<Supplier>),
    SetFilteredSuppliers(Vec<Supplier>),
    SetCurrentSupplier(Option<Supplier>),

    /// Replace the item associations of the focused supplier
    SetSupplierItems(Vec<SupplierItemAssociation>),

    SetLoading(bool),
    SetError(Option<String>),
    SetFilter(SupplierFilter),
    SetStats(SupplierStats),

    AddSupplier(Supplier),
    UpdateSupplier(Supplier),
    DeleteSupplier(String),

    /// Replace the association with the same supplier and item, or append it
    UpsertSupplierItem(SupplierItemAssociation),

    RemoveSupplierItem {
        supplier_id: String,
        item_id: String,
    },
}

/// High-level supplier operations, handled by the supplier middleware
#[derive(Debug, Clone, PartialEq)]
pub enum SupplierCommand {
    /// Load the collection and its statistics
    Load,
    ApplyFilter(SupplierFilter),
    FetchSupplier(String),

    /// Create the supplier, or update it if its id is already loaded
    SaveSupplier(Supplier),
    DeleteSupplier(String),

    /// Load the item associations of one supplier
    FetchSupplierItems(String),
    AssociateItem(SupplierItemAssociation),
    RemoveItemAssociation {
        supplier_id: String,
        item_id: String,
    },
}
