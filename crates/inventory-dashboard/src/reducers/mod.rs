pub mod app_reducer;
pub mod inventory_reducer;
pub mod supplier_reducer;
