use crate::actions::InventoryAction;
use crate::state::InventoryState;

/// Reducer for the inventory store
pub fn reduce_inventory(mut state: InventoryState, action: &InventoryAction) -> InventoryState {
    match action {
        InventoryAction::SetItems(items) => {
            state.items = items.clone();
            state.filtered_items = items.clone();
        }
        InventoryAction::SetFilteredItems(items) => {
            state.filtered_items = items.clone();
        }
        InventoryAction::SetCurrentItem(item) => {
            state.current_item = item.clone();
        }
        InventoryAction::SetLoading(is_loading) => {
            state.is_loading = *is_loading;
        }
        InventoryAction::SetError(error) => {
            state.error = error.clone();
        }
        InventoryAction::SetFilter(filter) => {
            state.filter = filter.clone();
        }
        InventoryAction::SetStats(stats) => {
            state.stats = Some(stats.clone());
        }
        InventoryAction::AddItem(item) => {
            state.items.push(item.clone());
            state.filtered_items.push(item.clone());
        }
        InventoryAction::UpdateItem(item) => {
            for existing in state
                .items
                .iter_mut()
                .chain(state.filtered_items.iter_mut())
                .filter(|existing| existing.id == item.id)
            {
                *existing = item.clone();
            }
            if state.current_item.as_ref().is_some_and(|c| c.id == item.id) {
                state.current_item = Some(item.clone());
            }
        }
        InventoryAction::DeleteItem(id) => {
            state.items.retain(|item| &item.id != id);
            state.filtered_items.retain(|item| &item.id != id);
            if state.current_item.as_ref().is_some_and(|c| &c.id == id) {
                state.current_item = None;
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{InventoryFilter, InventorySortKey};
    use inventory_client::{compute_inventory_stats, fixtures, InventoryItem};
    use pretty_assertions::assert_eq;

    fn loaded() -> InventoryState {
        reduce_inventory(
            InventoryState::default(),
            &InventoryAction::SetItems(fixtures::inventory_items()),
        )
    }

    fn ids(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_default_state() {
        let state = InventoryState::default();
        assert!(state.items.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.filter, InventoryFilter::sorted_by(InventorySortKey::Name));
        assert_eq!(state.stats, None);
    }

    #[test]
    fn test_set_items_replaces_both_collections_without_filtering() {
        let mut state = InventoryState::default();
        state.filter.search = Some("widget".to_string());

        let state = reduce_inventory(state, &InventoryAction::SetItems(fixtures::inventory_items()));

        assert_eq!(state.items.len(), 5);
        assert_eq!(state.filtered_items, state.items);
    }

    #[test]
    fn test_set_filtered_items_leaves_full_collection() {
        let state = loaded();
        let first = state.items[0].clone();

        let state = reduce_inventory(state, &InventoryAction::SetFilteredItems(vec![first]));

        assert_eq!(state.items.len(), 5);
        assert_eq!(ids(&state.filtered_items), vec!["1"]);
    }

    #[test]
    fn test_add_appends_to_both_collections() {
        let mut state = loaded();
        state.filtered_items.truncate(2);
        let mut item = state.items[0].clone();
        item.id = "6".to_string();

        let state = reduce_inventory(state, &InventoryAction::AddItem(item));

        assert_eq!(ids(&state.items), vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(ids(&state.filtered_items), vec!["1", "2", "6"]);
    }

    #[test]
    fn test_update_replaces_by_id_and_refreshes_current() {
        let state = loaded();
        let state = reduce_inventory(
            state.clone(),
            &InventoryAction::SetCurrentItem(Some(state.items[2].clone())),
        );
        let mut changed = state.items[2].clone();
        changed.quantity = 7;

        let state = reduce_inventory(state, &InventoryAction::UpdateItem(changed.clone()));

        assert_eq!(state.items[2], changed);
        assert_eq!(state.filtered_items[2], changed);
        assert_eq!(state.current_item, Some(changed));
    }

    #[test]
    fn test_update_keeps_unrelated_current_item() {
        let state = loaded();
        let current = state.items[0].clone();
        let state = reduce_inventory(state, &InventoryAction::SetCurrentItem(Some(current.clone())));
        let mut changed = state.items[1].clone();
        changed.name = "Renamed".to_string();

        let state = reduce_inventory(state, &InventoryAction::UpdateItem(changed));

        assert_eq!(state.current_item, Some(current));
        assert_eq!(state.items[1].name, "Renamed");
    }

    #[test]
    fn test_update_of_unknown_id_changes_nothing() {
        let before = loaded();
        let mut ghost = before.items[0].clone();
        ghost.id = "missing".to_string();

        let after = reduce_inventory(before.clone(), &InventoryAction::UpdateItem(ghost));

        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_removes_from_both_and_clears_current() {
        let state = loaded();
        let state = reduce_inventory(
            state.clone(),
            &InventoryAction::SetCurrentItem(Some(state.items[3].clone())),
        );

        let state = reduce_inventory(state, &InventoryAction::DeleteItem("4".to_string()));

        assert_eq!(ids(&state.items), vec!["1", "2", "3", "5"]);
        assert_eq!(ids(&state.filtered_items), vec!["1", "2", "3", "5"]);
        assert_eq!(state.current_item, None);
    }

    #[test]
    fn test_field_replacements() {
        let stats = compute_inventory_stats(&fixtures::inventory_items());
        let filter = InventoryFilter {
            min_quantity: Some(10),
            ..Default::default()
        };

        let state = [
            InventoryAction::SetLoading(true),
            InventoryAction::SetError(Some("Item not found".to_string())),
            InventoryAction::SetFilter(filter.clone()),
            InventoryAction::SetStats(stats.clone()),
        ]
        .iter()
        .fold(InventoryState::default(), reduce_inventory);

        assert!(state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Item not found"));
        assert_eq!(state.filter, filter);
        assert_eq!(state.stats, Some(stats));
    }
}
