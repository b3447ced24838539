use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".unified-inventory.toml";

/// Load config file content, searching in order:
/// 1. `.unified-inventory.toml` in the current working directory
/// 2. `~/.unified-inventory.toml`
/// 3. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    let candidates = [get_home_config_path(), crate::app_config_path().ok()];
    for path in candidates.into_iter().flatten() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Returns ~/.unified-inventory.toml if HOME is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
