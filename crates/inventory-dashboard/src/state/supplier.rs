//! Supplier State

use crate::domain_models::{SupplierFilter, SupplierSortKey, SupplierStatusFilter};
use inventory_client::{Supplier, SupplierItemAssociation, SupplierStats};

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierState {
    pub suppliers: Vec<Supplier>,
    pub filtered_suppliers: Vec<Supplier>,
    pub current_supplier: Option<Supplier>,
    /// Item associations of the focused supplier
    pub supplier_items: Vec<SupplierItemAssociation>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub filter: SupplierFilter,
    pub stats: Option<SupplierStats>,
}

impl SupplierState {
    pub fn find(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

impl Default for SupplierState {
    fn default() -> Self {
        Self {
            suppliers: Vec::new(),
            filtered_suppliers: Vec::new(),
            current_supplier: None,
            supplier_items: Vec::new(),
            is_loading: false,
            error: None,
            // The supplier list opens on active suppliers only
            filter: SupplierFilter {
                status: SupplierStatusFilter::Active,
                ..SupplierFilter::sorted_by(SupplierSortKey::Name)
            },
            stats: None,
        }
    }
}
