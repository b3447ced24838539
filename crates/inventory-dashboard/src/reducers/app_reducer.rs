use crate::actions::Action;
use crate::reducers::{inventory_reducer, supplier_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes tagged actions to the entity reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Inventory(inventory_action) => {
            state.inventory = inventory_reducer::reduce_inventory(state.inventory, inventory_action);
        }
        Action::Supplier(supplier_action) => {
            state.suppliers = supplier_reducer::reduce_supplier(state.suppliers, supplier_action);
        }
        Action::InventoryCommand(_) | Action::SupplierCommand(_) => {
            // Side effects are handled by middleware
        }
        Action::None => {}
    }
    state
}
