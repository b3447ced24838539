//! Inventory and supplier services
//!
//! This crate provides the data types, the async service traits, and
//! in-memory mock implementations that stand in for a remote inventory API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │   InventoryService / SupplierService traits   │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │   MockInventoryService / MockSupplierService  │
//! │   (latency via Clock, copies out)             │
//! └──────────────────────────────────────────────┘
//!            │                          │
//!            ▼                          ▼
//! ┌─────────────────────┐   ┌──────────────────────┐
//! │ Repository<T>       │   │ AssociationRepository │
//! │ (InMemoryRepository)│   │ (supplier, item) keys │
//! └─────────────────────┘   └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use inventory_client::{InventoryService, MockInventoryService, SystemClock};
//! use inventory_config::LatencyConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), inventory_client::ServiceError> {
//! let service = MockInventoryService::with_fixtures(Arc::new(SystemClock), LatencyConfig::default());
//! let items = service.list_items().await?;
//! let stats = service.item_stats().await?;
//! println!("{} items worth {:.2}", items.len(), stats.total_value);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod clock;
pub mod error;
pub mod fixtures;
pub mod mock_client;
pub mod repository;
pub mod stats;
pub mod types;

pub use client::{InventoryService, SupplierService};
pub use clock::{Clock, InstantClock, ManualClock, SystemClock};
pub use error::{ServiceError, ServiceResult};
pub use mock_client::{MockInventoryService, MockSupplierService};
pub use repository::{AssociationRepository, Entity, InMemoryRepository, Repository};
pub use stats::{compute_inventory_stats, compute_supplier_stats};
pub use types::{
    InventoryItem, InventoryStats, Supplier, SupplierInfo, SupplierItemAssociation,
    SupplierStats, SupplierStatus,
};
