use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::{env, fs};

const CONFIG_FILE: &str = ".nbdiff.toml";

/// Load config file content from the usual locations
///
/// Searches, in order:
/// 1. `.nbdiff.toml` in the current working directory
/// 2. `~/.nbdiff.toml`
/// 3. `config.toml` in the platform config directory (see [`crate::paths`])
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let candidates = [
        Some(PathBuf::from(CONFIG_FILE)),
        get_home_config_path(),
        crate::paths::global_config_path(),
    ];

    for path in candidates.into_iter().flatten() {
        if let Ok(content) = fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Load config file content from an explicit path
pub fn load_config_file_from(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Get the path to the config file in the home directory
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
