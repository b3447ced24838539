use anyhow::{bail, Context, Result};
use clap::Parser;
use inventory_client::{
    AssociationRepository, Clock, InMemoryRepository, InstantClock, InventoryItem,
    InventoryService, MockInventoryService, MockSupplierService, Supplier, SupplierService,
    SystemClock,
};
use inventory_config::AppConfig;
use std::sync::Arc;
use std::time::Duration;

use inventory_dashboard::actions::{Action, InventoryCommand, SupplierCommand};
use inventory_dashboard::cli::Cli;
use inventory_dashboard::logger;
use inventory_dashboard::middleware::{
    inventory_middleware::InventoryMiddleware, logging::LoggingMiddleware,
    supplier_middleware::SupplierMiddleware,
};
use inventory_dashboard::report::Report;
use inventory_dashboard::state::AppState;
use inventory_dashboard::store::Store;

/// Upper bound for a single round of service calls
const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting unified-inventory, logging to {}", log_file.display());

    let config = AppConfig::load();
    log::debug!("Config: {:?}", config);

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let (inventory_service, supplier_service) = build_services(&config);

    // Initialize store with middleware
    let mut store = Store::new(AppState::default());

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(InventoryMiddleware::new(
        runtime.handle().clone(),
        inventory_service,
    )));
    store.add_middleware(Box::new(SupplierMiddleware::new(
        runtime.handle().clone(),
        supplier_service,
    )));

    store.dispatch(Action::InventoryCommand(InventoryCommand::Load));
    store.dispatch(Action::SupplierCommand(SupplierCommand::Load));
    wait_for_services(&mut store)?;

    store.dispatch(Action::InventoryCommand(InventoryCommand::ApplyFilter(
        cli.inventory_filter(),
    )));
    store.dispatch(Action::SupplierCommand(SupplierCommand::ApplyFilter(
        cli.supplier_filter(),
    )));

    if let Some(id) = &cli.supplier {
        // One at a time: both commands share the supplier loading flag
        store.dispatch(Action::SupplierCommand(SupplierCommand::FetchSupplier(
            id.clone(),
        )));
        wait_for_services(&mut store)?;
        store.dispatch(Action::SupplierCommand(
            SupplierCommand::FetchSupplierItems(id.clone()),
        ));
        wait_for_services(&mut store)?;
    }

    print!("{}", Report::new(store.state(), cli.supplier.as_deref()));

    log::info!("Exiting unified-inventory");
    Ok(())
}

/// Mock services wired according to the config
fn build_services(
    config: &AppConfig,
) -> (Arc<dyn InventoryService>, Arc<dyn SupplierService>) {
    let clock: Arc<dyn Clock> = if config.simulate_latency {
        Arc::new(SystemClock)
    } else {
        Arc::new(InstantClock)
    };

    if config.seed_fixtures {
        (
            Arc::new(MockInventoryService::with_fixtures(
                Arc::clone(&clock),
                config.latency,
            )),
            Arc::new(MockSupplierService::with_fixtures(clock, config.latency)),
        )
    } else {
        log::info!("Starting with empty repositories");
        (
            Arc::new(MockInventoryService::new(
                Arc::new(InMemoryRepository::<InventoryItem>::new()),
                Arc::clone(&clock),
                config.latency,
            )),
            Arc::new(MockSupplierService::new(
                Arc::new(InMemoryRepository::<Supplier>::new()),
                Arc::new(AssociationRepository::default()),
                clock,
                config.latency,
            )),
        )
    }
}

fn wait_for_services(store: &mut Store) -> Result<()> {
    if !store.wait_until_idle(IDLE_TIMEOUT) {
        bail!("Timed out after {:?} waiting for the services", IDLE_TIMEOUT);
    }
    Ok(())
}
