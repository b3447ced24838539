//! Command line arguments
//!
//! Flags map onto the inventory and supplier filters. Text filters (search,
//! category) apply to both lists; the quantity and location flags only narrow
//! the items, `--status` only the suppliers.

use crate::domain_models::{
    InventoryFilter, InventorySortKey, SortDirection, SupplierFilter, SupplierSortKey,
    SupplierStatusFilter,
};
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "unified-inventory",
    about = "Browse inventory items and suppliers with filters and statistics",
    version
)]
pub struct Cli {
    #[arg(long, help = "Case-insensitive text matched against names, SKUs, contacts and notes")]
    pub search: Option<String>,

    #[arg(
        long = "category",
        value_name = "CATEGORY",
        help = "Only show this category (repeat for several)"
    )]
    pub categories: Vec<String>,

    #[arg(long, help = "Only show items stored at this exact location")]
    pub location: Option<String>,

    #[arg(long, help = "Only show items with at least this quantity")]
    pub min_quantity: Option<u32>,

    #[arg(long, help = "Only show items with at most this quantity")]
    pub max_quantity: Option<u32>,

    #[arg(long, value_enum, default_value_t = StatusArg::Active, help = "Supplier status to show")]
    pub status: StatusArg,

    #[arg(long, value_enum, default_value_t = ItemSortArg::Name, help = "Sort key for items")]
    pub sort: ItemSortArg,

    #[arg(
        long,
        value_enum,
        default_value_t = SupplierSortArg::Name,
        help = "Sort key for suppliers"
    )]
    pub supplier_sort: SupplierSortArg,

    #[arg(long, action = ArgAction::SetTrue, help = "Sort descending")]
    pub desc: bool,

    #[arg(long, value_name = "ID", help = "Show one supplier with its item associations")]
    pub supplier: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Active,
    Inactive,
    Pending,
}

impl From<StatusArg> for SupplierStatusFilter {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::All => SupplierStatusFilter::All,
            StatusArg::Active => SupplierStatusFilter::Active,
            StatusArg::Inactive => SupplierStatusFilter::Inactive,
            StatusArg::Pending => SupplierStatusFilter::Pending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ItemSortArg {
    Name,
    Quantity,
    UnitPrice,
    LastUpdated,
}

impl From<ItemSortArg> for InventorySortKey {
    fn from(value: ItemSortArg) -> Self {
        match value {
            ItemSortArg::Name => InventorySortKey::Name,
            ItemSortArg::Quantity => InventorySortKey::Quantity,
            ItemSortArg::UnitPrice => InventorySortKey::UnitPrice,
            ItemSortArg::LastUpdated => InventorySortKey::LastUpdated,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SupplierSortArg {
    Name,
    Rating,
    LeadTime,
    LastUpdated,
}

impl From<SupplierSortArg> for SupplierSortKey {
    fn from(value: SupplierSortArg) -> Self {
        match value {
            SupplierSortArg::Name => SupplierSortKey::Name,
            SupplierSortArg::Rating => SupplierSortKey::Rating,
            SupplierSortArg::LeadTime => SupplierSortKey::LeadTime,
            SupplierSortArg::LastUpdated => SupplierSortKey::LastUpdated,
        }
    }
}

impl Cli {
    fn direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn inventory_filter(&self) -> InventoryFilter {
        InventoryFilter {
            search: self.search.clone(),
            categories: self.categories.clone(),
            min_quantity: self.min_quantity,
            max_quantity: self.max_quantity,
            location: self.location.clone(),
            sort_by: Some(self.sort.into()),
            sort_direction: self.direction(),
        }
    }

    pub fn supplier_filter(&self) -> SupplierFilter {
        SupplierFilter {
            search: self.search.clone(),
            categories: self.categories.clone(),
            status: self.status.into(),
            sort_by: Some(self.supplier_sort.into()),
            sort_direction: self.direction(),
        }
    }
}
