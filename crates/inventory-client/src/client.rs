//! Inventory and supplier service traits
//!
//! These are the async contracts the dashboard talks to. The only
//! implementations shipped here are the in-memory mock services, but the store
//! never depends on a concrete type.

use crate::error::ServiceResult;
use crate::types::{
    InventoryItem, InventoryStats, Supplier, SupplierItemAssociation, SupplierStats,
};
use async_trait::async_trait;

/// Inventory API
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared with the
/// async tasks spawned by the dashboard middleware.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Fetch all inventory items
    async fn list_items(&self) -> ServiceResult<Vec<InventoryItem>>;

    /// Fetch a single item, `None` if no item has this id
    async fn get_item(&self, id: &str) -> ServiceResult<Option<InventoryItem>>;

    /// Create a new item
    ///
    /// The service assigns `id`, `created_at` and `last_updated`; whatever the
    /// caller put in those fields is discarded.
    async fn create_item(&self, item: InventoryItem) -> ServiceResult<InventoryItem>;

    /// Replace an existing item and refresh its `last_updated`
    ///
    /// Fails with `ServiceError::NotFound` if the id is unknown.
    async fn update_item(&self, item: InventoryItem) -> ServiceResult<InventoryItem>;

    /// Delete an item, returning whether one was removed
    async fn delete_item(&self, id: &str) -> ServiceResult<bool>;

    /// Aggregates over the current inventory
    async fn item_stats(&self) -> ServiceResult<InventoryStats>;
}

/// Supplier API
#[async_trait]
pub trait SupplierService: Send + Sync {
    /// Fetch all suppliers
    async fn list_suppliers(&self) -> ServiceResult<Vec<Supplier>>;

    /// Fetch a single supplier, `None` if no supplier has this id
    async fn get_supplier(&self, id: &str) -> ServiceResult<Option<Supplier>>;

    /// Create a new supplier (id and timestamps are assigned by the service)
    async fn create_supplier(&self, supplier: Supplier) -> ServiceResult<Supplier>;

    /// Replace an existing supplier and refresh its `last_updated`
    async fn update_supplier(&self, supplier: Supplier) -> ServiceResult<Supplier>;

    /// Delete a supplier, returning whether one was removed.
    ///
    /// Associations referencing the supplier are left in place.
    async fn delete_supplier(&self, id: &str) -> ServiceResult<bool>;

    /// Aggregates over the current suppliers
    async fn supplier_stats(&self) -> ServiceResult<SupplierStats>;

    /// All item associations of one supplier
    async fn list_associations_for(
        &self,
        supplier_id: &str,
    ) -> ServiceResult<Vec<SupplierItemAssociation>>;

    /// Create or replace the association with the same `(supplier_id, item_id)`
    async fn associate(
        &self,
        association: SupplierItemAssociation,
    ) -> ServiceResult<SupplierItemAssociation>;

    /// Remove an association, returning whether one was removed
    async fn disassociate(&self, supplier_id: &str, item_id: &str) -> ServiceResult<bool>;
}
