//! Plain-text summary of the dashboard state

use crate::state::{AppState, InventoryState, SupplierState};
use inventory_client::InventoryItem;
use std::fmt::{self, Display, Formatter};

/// Renders the filtered lists, their statistics and, optionally, one
/// supplier with its item associations
pub struct Report<'a> {
    state: &'a AppState,
    supplier_id: Option<&'a str>,
}

impl<'a> Report<'a> {
    pub fn new(state: &'a AppState, supplier_id: Option<&'a str>) -> Self {
        Self { state, supplier_id }
    }

    fn write_error(f: &mut Formatter<'_>, scope: &str, error: Option<&str>) -> fmt::Result {
        match error {
            Some(message) => writeln!(f, "!! {} error: {}", scope, message),
            None => Ok(()),
        }
    }

    fn write_inventory(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let inventory = &self.state.inventory;
        writeln!(
            f,
            "Inventory: {} of {} items{}",
            inventory.filtered_items.len(),
            inventory.items.len(),
            inventory_sort_label(inventory)
        )?;
        Self::write_error(f, "Inventory", inventory.error.as_deref())?;

        for item in &inventory.filtered_items {
            writeln!(
                f,
                "  {:<10} {:<12} {:<24} {:>6} {:>10.2}  {}{}",
                item.id,
                item.sku,
                item.name,
                item.quantity,
                item.unit_price,
                item.location,
                stock_marker(item)
            )?;
        }

        if let Some(stats) = &inventory.stats {
            writeln!(f)?;
            writeln!(
                f,
                "  Total items: {}  Total value: {:.2}  Low stock: {}  Out of stock: {}",
                stats.total_items, stats.total_value, stats.low_stock_items, stats.out_of_stock_items
            )?;
            writeln!(f, "  Highest stock: {}", stock_list(&stats.highest_stock_items))?;
            writeln!(f, "  Lowest stock: {}", stock_list(&stats.lowest_stock_items))?;
        }
        Ok(())
    }

    fn write_suppliers(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let suppliers = &self.state.suppliers;
        writeln!(
            f,
            "Suppliers: {} of {} (status: {}){}",
            suppliers.filtered_suppliers.len(),
            suppliers.suppliers.len(),
            suppliers.filter.status.label(),
            supplier_sort_label(suppliers)
        )?;
        Self::write_error(f, "Supplier", suppliers.error.as_deref())?;

        for supplier in &suppliers.filtered_suppliers {
            writeln!(
                f,
                "  {:<10} {:<26} {:<14} {:<8} rating {}  lead time {}",
                supplier.id,
                supplier.name,
                supplier.contact_name,
                supplier.status.as_str(),
                optional(supplier.rating),
                days(supplier.lead_time)
            )?;
        }

        if let Some(stats) = &suppliers.stats {
            writeln!(f)?;
            writeln!(
                f,
                "  Total: {}  Active: {}  Inactive: {}  Pending: {}  Average lead time: {:.1} days",
                stats.total_suppliers,
                stats.active_suppliers,
                stats.inactive_suppliers,
                stats.pending_suppliers,
                stats.average_lead_time
            )?;
            let top: Vec<&str> = stats.top_suppliers.iter().map(|s| s.name.as_str()).collect();
            writeln!(f, "  Top suppliers: {}", top.join(", "))?;
        }
        Ok(())
    }

    fn write_supplier_details(&self, f: &mut Formatter<'_>, id: &str) -> fmt::Result {
        let suppliers = &self.state.suppliers;
        let Some(supplier) = suppliers.current_supplier.as_ref().filter(|s| s.id == id) else {
            return writeln!(f, "Supplier {}: not found", id);
        };

        writeln!(f, "Supplier {}: {} ({})", supplier.id, supplier.name, supplier.status)?;
        writeln!(
            f,
            "  Contact: {} <{}> {}",
            supplier.contact_name, supplier.email, supplier.phone
        )?;
        if let Some(terms) = &supplier.payment_terms {
            writeln!(f, "  Payment terms: {}", terms)?;
        }
        if let Some(notes) = &supplier.notes {
            writeln!(f, "  Notes: {}", notes)?;
        }

        writeln!(f, "  Items: {}", suppliers.supplier_items.len())?;
        for association in &suppliers.supplier_items {
            let name = self
                .state
                .inventory
                .find(&association.item_id)
                .map_or("(unknown item)", |item| item.name.as_str());
            writeln!(
                f,
                "    {:<10} {:<24} {:>10.2}  lead time {}{}",
                association.item_id,
                name,
                association.unit_price,
                days(association.effective_lead_time(supplier)),
                if association.is_primary_supplier {
                    "  primary"
                } else {
                    ""
                }
            )?;
        }
        Ok(())
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_inventory(f)?;
        writeln!(f)?;
        self.write_suppliers(f)?;
        if let Some(id) = self.supplier_id {
            writeln!(f)?;
            self.write_supplier_details(f, id)?;
        }
        Ok(())
    }
}

fn inventory_sort_label(state: &InventoryState) -> String {
    state
        .filter
        .sort_by
        .map(|key| format!(", sorted by {} {}", key.label(), state.filter.sort_direction.label()))
        .unwrap_or_default()
}

fn supplier_sort_label(state: &SupplierState) -> String {
    state
        .filter
        .sort_by
        .map(|key| format!(", sorted by {} {}", key.label(), state.filter.sort_direction.label()))
        .unwrap_or_default()
}

fn stock_marker(item: &InventoryItem) -> &'static str {
    if item.is_out_of_stock() {
        "  [out of stock]"
    } else if item.is_low_stock() {
        "  [low stock]"
    } else {
        ""
    }
}

fn stock_list(items: &[InventoryItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} ({})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

fn optional<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn days(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |d| format!("{}d", d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{InventoryAction, SupplierAction};
    use crate::reducers::{inventory_reducer::reduce_inventory, supplier_reducer::reduce_supplier};
    use inventory_client::{compute_inventory_stats, compute_supplier_stats, fixtures};

    fn loaded_state() -> AppState {
        let items = fixtures::inventory_items();
        let suppliers = fixtures::suppliers();
        let mut state = AppState::default();
        state.inventory = [
            InventoryAction::SetStats(compute_inventory_stats(&items)),
            InventoryAction::SetItems(items),
        ]
        .iter()
        .fold(state.inventory, reduce_inventory);
        state.suppliers = [
            SupplierAction::SetStats(compute_supplier_stats(&suppliers)),
            SupplierAction::SetSuppliers(suppliers),
        ]
        .iter()
        .fold(state.suppliers, reduce_supplier);
        state
    }

    #[test]
    fn test_report_lists_items_and_stats() {
        let mut state = loaded_state();
        state.inventory.filtered_items[0].quantity = 0;

        let report = Report::new(&state, None).to_string();

        assert!(report.contains("Inventory: 5 of 5 items, sorted by Name ascending"));
        assert!(report.contains("WDG-A-001"));
        assert!(report.contains("[out of stock]"));
        assert!(report.contains("Highest stock: Material E (500), Component C (300), Widget A (150)"));
        assert!(report.contains("Suppliers: 5 of 5 (status: Active), sorted by Name ascending"));
        assert!(report.contains("Average lead time: 11.0 days"));
        assert!(report.contains("Top suppliers: Tech Parts Inc., Acme Supplies, Pro Tools Manufacturing"));
        assert!(!report.contains("error"));
    }

    #[test]
    fn test_report_shows_error_banner() {
        let mut state = loaded_state();
        state.suppliers.error = Some("Supplier not found".to_string());

        let report = Report::new(&state, None).to_string();

        assert!(report.contains("!! Supplier error: Supplier not found"));
    }

    #[test]
    fn test_report_supplier_details() {
        let mut state = loaded_state();
        state.suppliers.current_supplier = state.suppliers.find("S003").cloned();
        state.suppliers.supplier_items = fixtures::supplier_item_associations()
            .into_iter()
            .filter(|a| a.supplier_id == "S003")
            .collect();

        let report = Report::new(&state, Some("S003")).to_string();

        assert!(report.contains("Supplier S003: Global Components (active)"));
        assert!(report.contains("Items: 2"));
        assert!(report.contains("Component C"));
        assert!(report.contains("lead time 12d"));
        assert!(report.contains("primary"));
    }

    #[test]
    fn test_report_unknown_supplier() {
        let state = loaded_state();
        let report = Report::new(&state, Some("S999")).to_string();
        assert!(report.contains("Supplier S999: not found"));
    }
}
