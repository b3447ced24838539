//! Configuration and path management for unified-inventory
//!
//! This crate provides:
//! - Platform directories for config and cache files
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig) including simulated service latency

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, LatencyConfig};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
