//! Application configuration
//!
//! Configuration loaded from `.unified-inventory.toml`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from .unified-inventory.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Whether the mock services wait before resolving (like a remote API would)
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    /// Start the mock services with the bundled fixture data
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,

    /// Per-operation artificial delays
    #[serde(default)]
    pub latency: LatencyConfig,
}

fn default_simulate_latency() -> bool {
    true
}

fn default_seed_fixtures() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulate_latency: default_simulate_latency(),
            seed_fixtures: default_seed_fixtures(),
            latency: LatencyConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

/// Simulated service latency in milliseconds, per operation kind
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LatencyConfig {
    pub list_ms: u64,
    pub get_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub stats_ms: u64,
    pub associations_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_ms: 500,
            get_ms: 300,
            create_ms: 500,
            update_ms: 500,
            delete_ms: 300,
            stats_ms: 400,
            associations_ms: 300,
        }
    }
}

impl LatencyConfig {
    pub fn list(&self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    pub fn get(&self) -> Duration {
        Duration::from_millis(self.get_ms)
    }

    pub fn create(&self) -> Duration {
        Duration::from_millis(self.create_ms)
    }

    pub fn update(&self) -> Duration {
        Duration::from_millis(self.update_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    pub fn stats(&self) -> Duration {
        Duration::from_millis(self.stats_ms)
    }

    pub fn associations(&self) -> Duration {
        Duration::from_millis(self.associations_ms)
    }
}
