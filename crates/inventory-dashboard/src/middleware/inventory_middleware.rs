//! Inventory Middleware
//!
//! Turns [`InventoryCommand`]s into calls on the [`InventoryService`]:
//! - `Load`: list the items, then fetch their statistics
//! - `ApplyFilter`: recompute the filtered view from the loaded items
//! - `FetchItem`, `SaveItem`, `DeleteItem`: single item operations
//!
//! Every command sets `is_loading` before it starts and clears it once it
//! settles. The outcome lands in `error`: cleared on success, the failure
//! message otherwise.

use crate::actions::{Action, InventoryAction, InventoryCommand};
use crate::dispatcher::Dispatcher;
use crate::domain_models::apply_inventory_filter;
use crate::middleware::Middleware;
use crate::state::AppState;
use inventory_client::{InventoryItem, InventoryService, ServiceResult};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;

fn inventory(action: InventoryAction) -> Action {
    Action::Inventory(action)
}

/// Middleware for all inventory service operations
pub struct InventoryMiddleware {
    /// Tokio runtime for async operations
    runtime: Handle,
    service: Arc<dyn InventoryService>,
}

impl InventoryMiddleware {
    pub fn new(runtime: Handle, service: Arc<dyn InventoryService>) -> Self {
        Self { runtime, service }
    }

    /// Run `operation` on the runtime, bracketed by the loading and error
    /// transitions
    fn spawn_operation<F>(&self, dispatcher: &Dispatcher, name: &'static str, operation: F)
    where
        F: Future<Output = ServiceResult<()>> + Send + 'static,
    {
        dispatcher.dispatch(inventory(InventoryAction::SetLoading(true)));

        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match operation.await {
                Ok(()) => {
                    dispatcher.dispatch(inventory(InventoryAction::SetError(None)));
                }
                Err(e) => {
                    log::error!("InventoryMiddleware: {} failed: {}", name, e);
                    dispatcher.dispatch(inventory(InventoryAction::SetError(Some(e.to_string()))));
                }
            }
            dispatcher.dispatch(inventory(InventoryAction::SetLoading(false)));
        });
    }
}

impl Middleware for InventoryMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::InventoryCommand(command) = action else {
            return true;
        };

        match command {
            InventoryCommand::Load => {
                log::info!("InventoryMiddleware: Loading inventory");
                let operation = load(Arc::clone(&self.service), dispatcher.clone());
                self.spawn_operation(dispatcher, "load", operation);
            }
            InventoryCommand::ApplyFilter(filter) => {
                // Pure computation over the loaded items, no service call
                let filtered = apply_inventory_filter(&state.inventory.items, filter);
                log::debug!(
                    "InventoryMiddleware: Filter keeps {} of {} items",
                    filtered.len(),
                    state.inventory.items.len()
                );
                dispatcher.dispatch(inventory(InventoryAction::SetLoading(true)));
                dispatcher.dispatch(inventory(InventoryAction::SetFilter(filter.clone())));
                dispatcher.dispatch(inventory(InventoryAction::SetFilteredItems(filtered)));
                dispatcher.dispatch(inventory(InventoryAction::SetLoading(false)));
            }
            InventoryCommand::FetchItem(id) => {
                let operation = fetch_item(Arc::clone(&self.service), dispatcher.clone(), id.clone());
                self.spawn_operation(dispatcher, "fetch item", operation);
            }
            InventoryCommand::SaveItem(item) => {
                // Decided on the snapshot at dispatch time
                let exists = state.inventory.contains(&item.id);
                let operation = save_item(
                    Arc::clone(&self.service),
                    dispatcher.clone(),
                    item.clone(),
                    exists,
                );
                self.spawn_operation(dispatcher, "save item", operation);
            }
            InventoryCommand::DeleteItem(id) => {
                let operation = delete_item(Arc::clone(&self.service), dispatcher.clone(), id.clone());
                self.spawn_operation(dispatcher, "delete item", operation);
            }
        }

        false // Commands never reach the reducer
    }
}

async fn load(service: Arc<dyn InventoryService>, dispatcher: Dispatcher) -> ServiceResult<()> {
    let items = service.list_items().await?;
    log::info!("InventoryMiddleware: Loaded {} items", items.len());
    dispatcher.dispatch(inventory(InventoryAction::SetItems(items)));

    let stats = service.item_stats().await?;
    dispatcher.dispatch(inventory(InventoryAction::SetStats(stats)));
    Ok(())
}

async fn fetch_item(
    service: Arc<dyn InventoryService>,
    dispatcher: Dispatcher,
    id: String,
) -> ServiceResult<()> {
    let item = service.get_item(&id).await?;
    dispatcher.dispatch(inventory(InventoryAction::SetCurrentItem(item)));
    Ok(())
}

async fn save_item(
    service: Arc<dyn InventoryService>,
    dispatcher: Dispatcher,
    item: InventoryItem,
    exists: bool,
) -> ServiceResult<()> {
    if exists {
        let updated = service.update_item(item).await?;
        dispatcher.dispatch(inventory(InventoryAction::UpdateItem(updated)));
    } else {
        let created = service.create_item(item).await?;
        dispatcher.dispatch(inventory(InventoryAction::AddItem(created)));
    }
    Ok(())
}

async fn delete_item(
    service: Arc<dyn InventoryService>,
    dispatcher: Dispatcher,
    id: String,
) -> ServiceResult<()> {
    // Deleting an unknown id is not an error for the store
    service.delete_item(&id).await?;
    dispatcher.dispatch(inventory(InventoryAction::DeleteItem(id)));
    Ok(())
}
