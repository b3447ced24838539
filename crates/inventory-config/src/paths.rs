//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/unified-inventory/`, `~/.cache/unified-inventory/`
//! - macOS: `~/Library/Application Support/unified-inventory/`, `~/Library/Caches/unified-inventory/`
//! - Windows: `%APPDATA%\unified-inventory\`, `%LOCALAPPDATA%\unified-inventory\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "unified-inventory";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory (log files), creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file inside the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
