//! Supplier Middleware
//!
//! Turns [`SupplierCommand`]s into calls on the [`SupplierService`], with the
//! same loading/error bracketing as the inventory middleware. Besides the
//! supplier records themselves it manages the item associations of the
//! focused supplier.

use crate::actions::{Action, SupplierAction, SupplierCommand};
use crate::dispatcher::Dispatcher;
use crate::domain_models::apply_supplier_filter;
use crate::middleware::Middleware;
use crate::state::AppState;
use inventory_client::{ServiceResult, Supplier, SupplierItemAssociation, SupplierService};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;

fn supplier(action: SupplierAction) -> Action {
    Action::Supplier(action)
}

/// Middleware for all supplier service operations
pub struct SupplierMiddleware {
    /// Tokio runtime for async operations
    runtime: Handle,
    service: Arc<dyn SupplierService>,
}

impl SupplierMiddleware {
    pub fn new(runtime: Handle, service: Arc<dyn SupplierService>) -> Self {
        Self { runtime, service }
    }

    fn spawn_operation<F>(&self, dispatcher: &Dispatcher, name: &'static str, operation: F)
    where
        F: Future<Output = ServiceResult<()>> + Send + 'static,
    {
        dispatcher.dispatch(supplier(SupplierAction::SetLoading(true)));

        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match operation.await {
                Ok(()) => {
                    dispatcher.dispatch(supplier(SupplierAction::SetError(None)));
                }
                Err(e) => {
                    log::error!("SupplierMiddleware: {} failed: {}", name, e);
                    dispatcher.dispatch(supplier(SupplierAction::SetError(Some(e.to_string()))));
                }
            }
            dispatcher.dispatch(supplier(SupplierAction::SetLoading(false)));
        });
    }

    fn service(&self) -> Arc<dyn SupplierService> {
        Arc::clone(&self.service)
    }
}

impl Middleware for SupplierMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::SupplierCommand(command) = action else {
            return true;
        };

        match command {
            SupplierCommand::Load => {
                log::info!("SupplierMiddleware: Loading suppliers");
                let operation = load(self.service(), dispatcher.clone());
                self.spawn_operation(dispatcher, "load", operation);
            }
            SupplierCommand::ApplyFilter(filter) => {
                let filtered = apply_supplier_filter(&state.suppliers.suppliers, filter);
                log::debug!(
                    "SupplierMiddleware: Filter keeps {} of {} suppliers",
                    filtered.len(),
                    state.suppliers.suppliers.len()
                );
                dispatcher.dispatch(supplier(SupplierAction::SetLoading(true)));
                dispatcher.dispatch(supplier(SupplierAction::SetFilter(filter.clone())));
                dispatcher.dispatch(supplier(SupplierAction::SetFilteredSuppliers(filtered)));
                dispatcher.dispatch(supplier(SupplierAction::SetLoading(false)));
            }
            SupplierCommand::FetchSupplier(id) => {
                let operation = fetch_supplier(self.service(), dispatcher.clone(), id.clone());
                self.spawn_operation(dispatcher, "fetch supplier", operation);
            }
            SupplierCommand::SaveSupplier(record) => {
                let exists = state.suppliers.contains(&record.id);
                let operation =
                    save_supplier(self.service(), dispatcher.clone(), record.clone(), exists);
                self.spawn_operation(dispatcher, "save supplier", operation);
            }
            SupplierCommand::DeleteSupplier(id) => {
                let operation = delete_supplier(self.service(), dispatcher.clone(), id.clone());
                self.spawn_operation(dispatcher, "delete supplier", operation);
            }
            SupplierCommand::FetchSupplierItems(supplier_id) => {
                let operation =
                    fetch_supplier_items(self.service(), dispatcher.clone(), supplier_id.clone());
                self.spawn_operation(dispatcher, "fetch supplier items", operation);
            }
            SupplierCommand::AssociateItem(association) => {
                let operation =
                    associate_item(self.service(), dispatcher.clone(), association.clone());
                self.spawn_operation(dispatcher, "associate item", operation);
            }
            SupplierCommand::RemoveItemAssociation {
                supplier_id,
                item_id,
            } => {
                let operation = remove_item_association(
                    self.service(),
                    dispatcher.clone(),
                    supplier_id.clone(),
                    item_id.clone(),
                );
                self.spawn_operation(dispatcher, "remove item association", operation);
            }
        }

        false // Commands never reach the reducer
    }
}

async fn load(service: Arc<dyn SupplierService>, dispatcher: Dispatcher) -> ServiceResult<()> {
    let suppliers = service.list_suppliers().await?;
    log::info!("SupplierMiddleware: Loaded {} suppliers", suppliers.len());
    dispatcher.dispatch(supplier(SupplierAction::SetSuppliers(suppliers)));

    let stats = service.supplier_stats().await?;
    dispatcher.dispatch(supplier(SupplierAction::SetStats(stats)));
    Ok(())
}

async fn fetch_supplier(
    service: Arc<dyn SupplierService>,
    dispatcher: Dispatcher,
    id: String,
) -> ServiceResult<()> {
    let found = service.get_supplier(&id).await?;
    dispatcher.dispatch(supplier(SupplierAction::SetCurrentSupplier(found)));
    Ok(())
}

async fn save_supplier(
    service: Arc<dyn SupplierService>,
    dispatcher: Dispatcher,
    record: Supplier,
    exists: bool,
) -> ServiceResult<()> {
    if exists {
        let updated = service.update_supplier(record).await?;
        dispatcher.dispatch(supplier(SupplierAction::UpdateSupplier(updated)));
    } else {
        let created = service.create_supplier(record).await?;
        dispatcher.dispatch(supplier(SupplierAction::AddSupplier(created)));
    }
    Ok(())
}

async fn delete_supplier(
    service: Arc<dyn SupplierService>,
    dispatcher: Dispatcher,
    id: String,
) -> ServiceResult<()> {
    service.delete_supplier(&id).await?;
    dispatcher.dispatch(supplier(SupplierAction::DeleteSupplier(id)));
    Ok(())
}

async fn fetch_supplier_items(
    service: Arc<dyn SupplierService>,
    dispatcher: Dispatcher,
    supplier_id: String,
) -> ServiceResult<()> {
    let associations = service.list_associations_for(&supplier_id).await?;
    dispatcher.dispatch(supplier(SupplierAction::SetSupplierItems(associations)));
    Ok(())
}

async fn associate_item(
    service: Arc<dyn SupplierService>,
    dispatcher: Dispatcher,
    association: SupplierItemAssociation,
) -> ServiceResult<()> {
    let stored = service.associate(association).await?;
    dispatcher.dispatch(supplier(SupplierAction::UpsertSupplierItem(stored)));
    Ok(())
}

async fn remove_item_association(
    service: Arc<dyn SupplierService>,
    dispatcher: Dispatcher,
    supplier_id: String,
    item_id: String,
) -> ServiceResult<()> {
    service.disassociate(&supplier_id, &item_id).await?;
    dispatcher.dispatch(supplier(SupplierAction::RemoveSupplierItem {
        supplier_id,
        item_id,
    }));
    Ok(())
}
