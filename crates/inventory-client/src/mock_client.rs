//! In-memory mock services
//!
//! Stand-ins for a remote inventory API. Every call first waits the configured
//! latency on the injected [`Clock`], then works against a [`Repository`].
//! Returned values are always copies of what is stored.

use crate::client::{InventoryService, SupplierService};
use crate::clock::Clock;
use crate::error::ServiceResult;
use crate::fixtures;
use crate::repository::{AssociationRepository, Entity, InMemoryRepository, Repository};
use crate::stats::{compute_inventory_stats, compute_supplier_stats};
use crate::types::{
    InventoryItem, InventoryStats, Supplier, SupplierItemAssociation, SupplierStats,
};
use async_trait::async_trait;
use inventory_config::LatencyConfig;
use log::{debug, info, warn};
use std::sync::Arc;

/// CRUD over one repository with simulated latency
#[derive(Clone)]
struct Backend<T: Entity> {
    records: Arc<dyn Repository<T>>,
    clock: Arc<dyn Clock>,
    latency: LatencyConfig,
}

impl<T: Entity> Backend<T> {
    async fn list(&self) -> Vec<T> {
        self.clock.sleep(self.latency.list()).await;
        let records = self.records.list();
        debug!("Listed {} {} records", records.len(), T::KIND);
        records
    }

    async fn get(&self, id: &str) -> Option<T> {
        self.clock.sleep(self.latency.get()).await;
        let record = self.records.get(id);
        if record.is_none() {
            debug!("{} {} not found", T::KIND, id);
        }
        record
    }

    async fn create(&self, mut record: T) -> T {
        self.clock.sleep(self.latency.create()).await;
        record.stamp_created(T::generate_id(), self.clock.now());
        let created = self.records.create(record);
        info!("Created {} {}", T::KIND, created.id());
        created
    }

    async fn update(&self, mut record: T) -> ServiceResult<T> {
        self.clock.sleep(self.latency.update()).await;
        record.touch(self.clock.now());
        match self.records.update(record) {
            Ok(updated) => {
                info!("Updated {} {}", T::KIND, updated.id());
                Ok(updated)
            }
            Err(e) => {
                warn!("Update rejected: {}", e);
                Err(e)
            }
        }
    }

    async fn delete(&self, id: &str) -> bool {
        self.clock.sleep(self.latency.delete()).await;
        let removed = self.records.delete(id);
        if removed {
            info!("Deleted {} {}", T::KIND, id);
        } else {
            debug!("Delete of unknown {} {} ignored", T::KIND, id);
        }
        removed
    }

    async fn snapshot_for_stats(&self) -> Vec<T> {
        self.clock.sleep(self.latency.stats()).await;
        self.records.list()
    }
}

/// Mock [`InventoryService`]
#[derive(Clone)]
pub struct MockInventoryService {
    items: Backend<InventoryItem>,
}

impl MockInventoryService {
    pub fn new(
        items: Arc<dyn Repository<InventoryItem>>,
        clock: Arc<dyn Clock>,
        latency: LatencyConfig,
    ) -> Self {
        Self {
            items: Backend {
                records: items,
                clock,
                latency,
            },
        }
    }

    /// Service backed by a fresh repository holding the fixture items
    pub fn with_fixtures(clock: Arc<dyn Clock>, latency: LatencyConfig) -> Self {
        let items = InMemoryRepository::with_records(fixtures::inventory_items());
        Self::new(Arc::new(items), clock, latency)
    }
}

#[async_trait]
impl InventoryService for MockInventoryService {
    async fn list_items(&self) -> ServiceResult<Vec<InventoryItem>> {
        Ok(self.items.list().await)
    }

    async fn get_item(&self, id: &str) -> ServiceResult<Option<InventoryItem>> {
        Ok(self.items.get(id).await)
    }

    async fn create_item(&self, item: InventoryItem) -> ServiceResult<InventoryItem> {
        Ok(self.items.create(item).await)
    }

    async fn update_item(&self, item: InventoryItem) -> ServiceResult<InventoryItem> {
        self.items.update(item).await
    }

    async fn delete_item(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.items.delete(id).await)
    }

    async fn item_stats(&self) -> ServiceResult<InventoryStats> {
        let items = self.items.snapshot_for_stats().await;
        Ok(compute_inventory_stats(&items))
    }
}

/// Mock [`SupplierService`]
#[derive(Clone)]
pub struct MockSupplierService {
    suppliers: Backend<Supplier>,
    associations: Arc<AssociationRepository>,
}

impl MockSupplierService {
    pub fn new(
        suppliers: Arc<dyn Repository<Supplier>>,
        associations: Arc<AssociationRepository>,
        clock: Arc<dyn Clock>,
        latency: LatencyConfig,
    ) -> Self {
        Self {
            suppliers: Backend {
                records: suppliers,
                clock,
                latency,
            },
            associations,
        }
    }

    /// Service backed by fresh repositories holding the fixture suppliers and links
    pub fn with_fixtures(clock: Arc<dyn Clock>, latency: LatencyConfig) -> Self {
        let suppliers = InMemoryRepository::with_records(fixtures::suppliers());
        let associations = AssociationRepository::new(fixtures::supplier_item_associations());
        Self::new(Arc::new(suppliers), Arc::new(associations), clock, latency)
    }

    async fn association_delay(&self) {
        let delay = self.suppliers.latency.associations();
        self.suppliers.clock.sleep(delay).await;
    }
}

#[async_trait]
impl SupplierService for MockSupplierService {
    async fn list_suppliers(&self) -> ServiceResult<Vec<Supplier>> {
        Ok(self.suppliers.list().await)
    }

    async fn get_supplier(&self, id: &str) -> ServiceResult<Option<Supplier>> {
        Ok(self.suppliers.get(id).await)
    }

    async fn create_supplier(&self, supplier: Supplier) -> ServiceResult<Supplier> {
        Ok(self.suppliers.create(supplier).await)
    }

    async fn update_supplier(&self, supplier: Supplier) -> ServiceResult<Supplier> {
        self.suppliers.update(supplier).await
    }

    async fn delete_supplier(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.suppliers.delete(id).await)
    }

    async fn supplier_stats(&self) -> ServiceResult<SupplierStats> {
        let suppliers = self.suppliers.snapshot_for_stats().await;
        Ok(compute_supplier_stats(&suppliers))
    }

    async fn list_associations_for(
        &self,
        supplier_id: &str,
    ) -> ServiceResult<Vec<SupplierItemAssociation>> {
        self.association_delay().await;
        Ok(self.associations.for_supplier(supplier_id))
    }

    async fn associate(
        &self,
        association: SupplierItemAssociation,
    ) -> ServiceResult<SupplierItemAssociation> {
        self.association_delay().await;
        let stored = self.associations.upsert(association);
        info!(
            "Associated supplier {} with item {}",
            stored.supplier_id, stored.item_id
        );
        Ok(stored)
    }

    async fn disassociate(&self, supplier_id: &str, item_id: &str) -> ServiceResult<bool> {
        self.association_delay().await;
        let removed = self.associations.remove(supplier_id, item_id);
        if removed {
            info!(
                "Removed association supplier {} / item {}",
                supplier_id, item_id
            );
        }
        Ok(removed)
    }
}
