//! In-memory backing store for the mock services
//!
//! A [`Repository`] is created once per process (or per test) and handed to the
//! service that owns it. Everything it returns is a copy; mutating a returned
//! value never touches the stored record.

use crate::error::{ServiceError, ServiceResult};
use crate::types::{InventoryItem, Supplier, SupplierItemAssociation};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// A record that can live in a [`Repository`]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name, used in "not found" messages
    const KIND: &'static str;

    /// Prefix for generated ids
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    /// Assign identity and creation timestamps to a new record
    fn stamp_created(&mut self, id: String, now: DateTime<Utc>);

    /// Refresh the modification timestamp
    fn touch(&mut self, now: DateTime<Utc>);

    /// Generate a fresh id for this entity kind
    fn generate_id() -> String {
        format!("{}{}", Self::ID_PREFIX, Uuid::new_v4().simple())
    }
}

impl Entity for InventoryItem {
    const KIND: &'static str = "Item";
    const ID_PREFIX: &'static str = "item-";

    fn id(&self) -> &str {
        &self.id
    }

    fn stamp_created(&mut self, id: String, now: DateTime<Utc>) {
        self.id = id;
        self.created_at = now;
        self.last_updated = now;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }
}

impl Entity for Supplier {
    const KIND: &'static str = "Supplier";
    const ID_PREFIX: &'static str = "S-";

    fn id(&self) -> &str {
        &self.id
    }

    fn stamp_created(&mut self, id: String, now: DateTime<Utc>) {
        self.id = id;
        self.created_at = now;
        self.last_updated = now;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }
}

/// Storage contract the mock services are written against
pub trait Repository<T: Entity>: Send + Sync {
    /// All records in insertion order
    fn list(&self) -> Vec<T>;

    fn get(&self, id: &str) -> Option<T>;

    /// Store a record under its own id (replacing any record with that id)
    fn create(&self, entity: T) -> T;

    /// Replace an existing record; fails if the id is unknown
    fn update(&self, entity: T) -> ServiceResult<T>;

    /// Remove a record, returning whether one was removed
    fn delete(&self, id: &str) -> bool;
}

#[derive(Debug)]
struct Records<T> {
    order: Vec<String>,
    by_id: HashMap<String, T>,
}

/// [`Repository`] backed by a hash map keyed by id
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: Mutex<Records<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a repository pre-populated with `records`, keeping their order
    pub fn with_records(records: Vec<T>) -> Self {
        let repo = Self {
            records: Mutex::new(Records {
                order: Vec::with_capacity(records.len()),
                by_id: HashMap::with_capacity(records.len()),
            }),
        };
        for record in records {
            repo.create(record);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Records<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        let records = self.lock();
        records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id).cloned())
            .collect()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.lock().by_id.get(id).cloned()
    }

    fn create(&self, entity: T) -> T {
        let mut records = self.lock();
        let id = entity.id().to_string();
        if records.by_id.insert(id.clone(), entity.clone()).is_none() {
            records.order.push(id);
        }
        entity
    }

    fn update(&self, entity: T) -> ServiceResult<T> {
        let mut records = self.lock();
        match records.by_id.get_mut(entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(ServiceError::not_found(T::KIND, entity.id())),
        }
    }

    fn delete(&self, id: &str) -> bool {
        let mut records = self.lock();
        if records.by_id.remove(id).is_none() {
            return false;
        }
        records.order.retain(|existing| existing != id);
        true
    }
}

/// Supplier/item links keyed by `(supplier_id, item_id)`
#[derive(Debug, Default)]
pub struct AssociationRepository {
    associations: Mutex<Vec<SupplierItemAssociation>>,
}

impl AssociationRepository {
    pub fn new(associations: Vec<SupplierItemAssociation>) -> Self {
        Self {
            associations: Mutex::new(associations),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SupplierItemAssociation>> {
        self.associations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<SupplierItemAssociation> {
        self.lock().clone()
    }

    pub fn for_supplier(&self, supplier_id: &str) -> Vec<SupplierItemAssociation> {
        self.lock()
            .iter()
            .filter(|a| a.supplier_id == supplier_id)
            .cloned()
            .collect()
    }

    pub fn for_item(&self, item_id: &str) -> Vec<SupplierItemAssociation> {
        self.lock()
            .iter()
            .filter(|a| a.item_id == item_id)
            .cloned()
            .collect()
    }

    /// Insert or replace by composite key.
    ///
    /// When replacing, a missing `last_purchase_date` keeps the stored one.
    pub fn upsert(&self, association: SupplierItemAssociation) -> SupplierItemAssociation {
        let mut associations = self.lock();
        let existing = associations
            .iter_mut()
            .find(|a| a.is_for(&association.supplier_id, &association.item_id));

        match existing {
            Some(slot) => {
                let last_purchase_date = association.last_purchase_date.or(slot.last_purchase_date);
                *slot = SupplierItemAssociation {
                    last_purchase_date,
                    ..association
                };
                slot.clone()
            }
            None => {
                associations.push(association.clone());
                association
            }
        }
    }

    pub fn remove(&self, supplier_id: &str, item_id: &str) -> bool {
        let mut associations = self.lock();
        let Some(index) = associations
            .iter()
            .position(|a| a.is_for(supplier_id, item_id))
        else {
            return false;
        };
        associations.remove(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::TimeZone;

    #[test]
    fn test_list_preserves_insertion_order() {
        let repo = InMemoryRepository::with_records(fixtures::inventory_items());
        let ids: Vec<String> = repo.list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_returned_records_are_copies() {
        let repo = InMemoryRepository::with_records(fixtures::inventory_items());
        let mut item = repo.get("1").unwrap();
        item.quantity = 0;
        assert_eq!(repo.get("1").unwrap().quantity, 150);

        let mut all = repo.list();
        all[0].name = "Changed".to_string();
        assert_eq!(repo.get("1").unwrap().name, "Widget A");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryRepository::with_records(fixtures::suppliers());
        let mut supplier = repo.get("S001").unwrap();
        supplier.id = "S999".to_string();

        let err = repo.update(supplier).unwrap_err();
        assert_eq!(err, ServiceError::not_found("Supplier", "S999"));
        assert_eq!(err.to_string(), "Supplier not found");
    }

    #[test]
    fn test_delete_reports_whether_removed() {
        let repo = InMemoryRepository::with_records(fixtures::suppliers());
        assert!(repo.delete("S003"));
        assert!(!repo.delete("S003"));
        assert_eq!(repo.len(), 4);
        assert!(repo.list().iter().all(|s| s.id != "S003"));
    }

    #[test]
    fn test_stamp_created_sets_identity_and_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let mut item = fixtures::inventory_items().remove(0);
        item.stamp_created(InventoryItem::generate_id(), now);

        assert!(item.id.starts_with("item-"));
        assert_eq!(item.created_at, now);
        assert_eq!(item.last_updated, now);
    }

    #[test]
    fn test_association_upsert_keeps_last_purchase_date() {
        let repo = AssociationRepository::new(fixtures::supplier_item_associations());
        let mut association = repo.for_supplier("S001").remove(0);
        let previous_date = association.last_purchase_date;
        association.unit_price = 21.0;
        association.last_purchase_date = None;

        let stored = repo.upsert(association);

        assert_eq!(stored.unit_price, 21.0);
        assert_eq!(stored.last_purchase_date, previous_date);
        assert_eq!(repo.for_supplier("S001").len(), 1);
    }

    #[test]
    fn test_association_upsert_appends_new_key() {
        let repo = AssociationRepository::new(fixtures::supplier_item_associations());
        let before = repo.list().len();
        repo.upsert(SupplierItemAssociation {
            supplier_id: "S001".to_string(),
            item_id: "3".to_string(),
            is_primary_supplier: true,
            unit_price: 5.0,
            min_order_quantity: None,
            lead_time: None,
            last_purchase_date: None,
        });

        assert_eq!(repo.list().len(), before + 1);
        // Item 3 now has two primary suppliers; nothing prevents that
        let primaries = repo
            .for_item("3")
            .into_iter()
            .filter(|a| a.is_primary_supplier)
            .count();
        assert_eq!(primaries, 2);
    }

    #[test]
    fn test_association_remove() {
        let repo = AssociationRepository::new(fixtures::supplier_item_associations());
        assert!(repo.remove("S003", "5"));
        assert!(!repo.remove("S003", "5"));
        assert_eq!(repo.for_supplier("S003").len(), 1);
    }
}
