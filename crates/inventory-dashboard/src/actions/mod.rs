//! Actions module
//!
//! Actions are tagged by domain. Each domain has two kinds:
//! - `*Action`: state transitions, reduced into a new state
//! - `*Command`: operations with side effects, consumed by middleware which
//!   dispatches transitions once the service call settles

pub mod inventory;
pub mod supplier;

pub use inventory::{InventoryAction, InventoryCommand};
pub use supplier::{SupplierAction, SupplierCommand};

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Inventory state transitions
    Inventory(InventoryAction),
    /// Inventory operations (handled by middleware)
    InventoryCommand(InventoryCommand),

    /// Supplier state transitions
    Supplier(SupplierAction),
    /// Supplier operations (handled by middleware)
    SupplierCommand(SupplierCommand),

    /// No-op action
    None,
}
