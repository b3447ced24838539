//! Inventory and supplier dashboard
//!
//! A Redux-style store over the inventory and supplier services:
//!
//! ```text
//! command ──► Store::dispatch ──► middleware chain ──► reducer ──► AppState
//!                                     │                   ▲
//!                                     ▼                   │
//!                              tokio task (service) ── Dispatcher (channel)
//! ```
//!
//! Commands (`InventoryCommand`, `SupplierCommand`) are consumed by middleware,
//! which calls the services and dispatches plain state transitions
//! (`InventoryAction`, `SupplierAction`) back into the store.

pub mod actions;
pub mod cli;
pub mod dispatcher;
pub mod domain_models;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod report;
pub mod state;
pub mod store;
