//! Application State Module
//!
//! Contains all state types used by the application, organized by entity.

mod app;
mod inventory;
mod supplier;

pub use app::AppState;
pub use inventory::InventoryState;
pub use supplier::SupplierState;
