//! Inventory and supplier data transfer objects
//!
//! These types are what the services hand out and what the dashboard stores.
//! Field names serialize in camelCase to match the JSON the dashboard API speaks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stocked item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// Free-text storage location (e.g. "Warehouse A")
    pub location: String,
    /// Quantity at or below which the item counts as low stock
    pub reorder_point: u32,
    /// Summary of the supplier this item is bought from
    pub supplier_info: SupplierInfo,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl InventoryItem {
    /// Stock value of this line (quantity × unit price)
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_point
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

/// Supplier summary embedded in an inventory item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierInfo {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Days it takes to receive an order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<u32>,
}

/// Lifecycle status of a supplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl SupplierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supplier we buy inventory from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// 1-5 star rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub status: SupplierStatus,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Product categories this supplier delivers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Average lead time in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<u32>,
}

/// Many-to-many link between a supplier and an inventory item
///
/// Keyed by `(supplier_id, item_id)`. Nothing enforces a single primary
/// supplier per item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierItemAssociation {
    pub supplier_id: String,
    pub item_id: String,
    pub is_primary_supplier: bool,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_quantity: Option<u32>,
    /// Item-specific lead time, overrides the supplier-level one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_purchase_date: Option<DateTime<Utc>>,
}

impl SupplierItemAssociation {
    /// Whether this association has the given composite key
    pub fn is_for(&self, supplier_id: &str, item_id: &str) -> bool {
        self.supplier_id == supplier_id && self.item_id == item_id
    }

    /// Lead time for this item, falling back to the supplier-level lead time
    pub fn effective_lead_time(&self, supplier: &Supplier) -> Option<u32> {
        self.lead_time.or(supplier.lead_time)
    }
}

/// Aggregates over the inventory collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_value: f64,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    /// Three items with the highest quantity, highest first
    pub highest_stock_items: Vec<InventoryItem>,
    /// Three items with the lowest quantity, lowest first
    pub lowest_stock_items: Vec<InventoryItem>,
}

/// Aggregates over the supplier collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierStats {
    pub total_suppliers: usize,
    pub active_suppliers: usize,
    pub inactive_suppliers: usize,
    pub pending_suppliers: usize,
    /// Mean lead time in days; suppliers without one count as 0
    pub average_lead_time: f64,
    /// Up to three active suppliers, best rated first
    pub top_suppliers: Vec<Supplier>,
}
