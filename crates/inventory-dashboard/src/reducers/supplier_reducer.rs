use crate::actions::SupplierAction;
use crate::state::SupplierState;

/// Reducer for the supplier store
pub fn reduce_supplier(mut state: SupplierState, action: &SupplierAction) -> SupplierState {
    match action {
        SupplierAction::SetSuppliers(suppliers) => {
            state.suppliers = suppliers.clone();
            state.filtered_suppliers = suppliers.clone();
        }
        SupplierAction::SetFilteredSuppliers(suppliers) => {
            state.filtered_suppliers = suppliers.clone();
        }
        SupplierAction::SetCurrentSupplier(supplier) => {
            state.current_supplier = supplier.clone();
        }
        SupplierAction::SetSupplierItems(associations) => {
            state.supplier_items = associations.clone();
        }
        SupplierAction::SetLoading(is_loading) => {
            state.is_loading = *is_loading;
        }
        SupplierAction::SetError(error) => {
            state.error = error.clone();
        }
        SupplierAction::SetFilter(filter) => {
            state.filter = filter.clone();
        }
        SupplierAction::SetStats(stats) => {
            state.stats = Some(stats.clone());
        }
        SupplierAction::AddSupplier(supplier) => {
            state.suppliers.push(supplier.clone());
            state.filtered_suppliers.push(supplier.clone());
        }
        SupplierAction::UpdateSupplier(supplier) => {
            for existing in state
                .suppliers
                .iter_mut()
                .chain(state.filtered_suppliers.iter_mut())
                .filter(|existing| existing.id == supplier.id)
            {
                *existing = supplier.clone();
            }
            if state
                .current_supplier
                .as_ref()
                .is_some_and(|c| c.id == supplier.id)
            {
                state.current_supplier = Some(supplier.clone());
            }
        }
        SupplierAction::DeleteSupplier(id) => {
            // Associations referencing the supplier stay where they are
            state.suppliers.retain(|supplier| &supplier.id != id);
            state.filtered_suppliers.retain(|supplier| &supplier.id != id);
            if state.current_supplier.as_ref().is_some_and(|c| &c.id == id) {
                state.current_supplier = None;
            }
        }
        SupplierAction::UpsertSupplierItem(association) => {
            let position = state
                .supplier_items
                .iter()
                .position(|existing| existing.is_for(&association.supplier_id, &association.item_id));
            match position {
                Some(index) => state.supplier_items[index] = association.clone(),
                None => state.supplier_items.push(association.clone()),
            }
        }
        SupplierAction::RemoveSupplierItem {
            supplier_id,
            item_id,
        } => {
            state
                .supplier_items
                .retain(|existing| !existing.is_for(supplier_id, item_id));
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::SupplierStatusFilter;
    use inventory_client::{fixtures, Supplier, SupplierItemAssociation};
    use pretty_assertions::assert_eq;

    fn loaded() -> SupplierState {
        let state = reduce_supplier(
            SupplierState::default(),
            &SupplierAction::SetSuppliers(fixtures::suppliers()),
        );
        reduce_supplier(
            state,
            &SupplierAction::SetSupplierItems(fixtures::supplier_item_associations()),
        )
    }

    fn ids(suppliers: &[Supplier]) -> Vec<&str> {
        suppliers.iter().map(|s| s.id.as_str()).collect()
    }

    fn pairs(associations: &[SupplierItemAssociation]) -> Vec<(&str, &str)> {
        associations
            .iter()
            .map(|a| (a.supplier_id.as_str(), a.item_id.as_str()))
            .collect()
    }

    #[test]
    fn test_default_filter_shows_active_suppliers() {
        let state = SupplierState::default();
        assert_eq!(state.filter.status, SupplierStatusFilter::Active);
        assert!(state.supplier_items.is_empty());
    }

    #[test]
    fn test_set_suppliers_replaces_both_collections() {
        let state = loaded();
        assert_eq!(state.suppliers.len(), 5);
        // Filter is not reapplied: the inactive supplier is still visible
        assert_eq!(state.filtered_suppliers, state.suppliers);
    }

    #[test]
    fn test_delete_supplier_keeps_associations() {
        let state = loaded();
        let state = reduce_supplier(
            state.clone(),
            &SupplierAction::SetCurrentSupplier(state.find("S005").cloned()),
        );

        let state = reduce_supplier(state, &SupplierAction::DeleteSupplier("S005".to_string()));

        assert_eq!(ids(&state.suppliers), vec!["S001", "S002", "S003", "S004"]);
        assert_eq!(ids(&state.filtered_suppliers), vec!["S001", "S002", "S003", "S004"]);
        assert_eq!(state.current_supplier, None);
        assert!(state
            .supplier_items
            .iter()
            .any(|a| a.is_for("S005", "5")));
    }

    #[test]
    fn test_add_and_update_supplier() {
        let state = loaded();
        let mut added = state.suppliers[0].clone();
        added.id = "S-new".to_string();
        let state = reduce_supplier(state, &SupplierAction::AddSupplier(added.clone()));
        assert_eq!(state.suppliers.last(), Some(&added));
        assert_eq!(state.filtered_suppliers.last(), Some(&added));

        let state = reduce_supplier(
            state,
            &SupplierAction::SetCurrentSupplier(Some(added.clone())),
        );
        let mut renamed = added;
        renamed.name = "Renamed Supplies".to_string();
        let state = reduce_supplier(state, &SupplierAction::UpdateSupplier(renamed.clone()));

        assert_eq!(state.find("S-new"), Some(&renamed));
        assert_eq!(state.current_supplier, Some(renamed));
    }

    #[test]
    fn test_upsert_supplier_item_replaces_by_composite_key() {
        let state = loaded();
        let mut changed = state.supplier_items[3].clone();
        changed.unit_price = 2.75;

        let state = reduce_supplier(state, &SupplierAction::UpsertSupplierItem(changed.clone()));

        assert_eq!(state.supplier_items.len(), 6);
        assert_eq!(state.supplier_items[3], changed);
    }

    #[test]
    fn test_upsert_supplier_item_appends_new_pair() {
        let state = loaded();
        let mut added = state.supplier_items[0].clone();
        added.item_id = "3".to_string();
        added.is_primary_supplier = false;

        let state = reduce_supplier(state, &SupplierAction::UpsertSupplierItem(added));

        assert_eq!(pairs(&state.supplier_items).last(), Some(&("S001", "3")));
        assert_eq!(state.supplier_items.len(), 7);
    }

    #[test]
    fn test_remove_supplier_item() {
        let state = loaded();
        let state = reduce_supplier(
            state,
            &SupplierAction::RemoveSupplierItem {
                supplier_id: "S003".to_string(),
                item_id: "5".to_string(),
            },
        );

        assert_eq!(
            pairs(&state.supplier_items),
            vec![("S001", "1"), ("S002", "2"), ("S003", "3"), ("S004", "4"), ("S005", "5")]
        );
    }
}
