//! Derived statistics over inventory and supplier collections

use crate::types::{InventoryItem, InventoryStats, Supplier, SupplierStats, SupplierStatus};

/// Number of entries in the highest/lowest stock and top supplier lists
const RANKING_SIZE: usize = 3;

pub fn compute_inventory_stats(items: &[InventoryItem]) -> InventoryStats {
    let total_value: f64 = items.iter().map(InventoryItem::stock_value).sum();
    let low_stock_items = items.iter().filter(|i| i.is_low_stock()).count();
    let out_of_stock_items = items.iter().filter(|i| i.is_out_of_stock()).count();

    // Stable: equal quantities keep collection order
    let mut by_quantity: Vec<&InventoryItem> = items.iter().collect();
    by_quantity.sort_by_key(|item| item.quantity);

    InventoryStats {
        total_items: items.len(),
        total_value,
        low_stock_items,
        out_of_stock_items,
        highest_stock_items: by_quantity
            .iter()
            .rev()
            .take(RANKING_SIZE)
            .map(|&item| item.clone())
            .collect(),
        lowest_stock_items: by_quantity
            .iter()
            .take(RANKING_SIZE)
            .map(|&item| item.clone())
            .collect(),
    }
}

pub fn compute_supplier_stats(suppliers: &[Supplier]) -> SupplierStats {
    let count_status =
        |status: SupplierStatus| suppliers.iter().filter(|s| s.status == status).count();

    let total_lead_time: u64 = suppliers
        .iter()
        .map(|s| u64::from(s.lead_time.unwrap_or(0)))
        .sum();
    let average_lead_time = if suppliers.is_empty() {
        0.0
    } else {
        total_lead_time as f64 / suppliers.len() as f64
    };

    let mut active: Vec<&Supplier> = suppliers
        .iter()
        .filter(|s| s.status == SupplierStatus::Active)
        .collect();
    active.sort_by(|a, b| b.rating.unwrap_or(0).cmp(&a.rating.unwrap_or(0)));

    SupplierStats {
        total_suppliers: suppliers.len(),
        active_suppliers: count_status(SupplierStatus::Active),
        inactive_suppliers: count_status(SupplierStatus::Inactive),
        pending_suppliers: count_status(SupplierStatus::Pending),
        average_lead_time,
        top_suppliers: active
            .into_iter()
            .take(RANKING_SIZE)
            .cloned()
            .collect(),
    }
}
