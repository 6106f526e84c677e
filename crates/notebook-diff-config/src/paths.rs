//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/nbdiff/`, `~/.cache/nbdiff/`
//! - macOS: `~/Library/Application Support/nbdiff/`, `~/Library/Caches/nbdiff/`
//! - Windows: `%APPDATA%\nbdiff\`, `%LOCALAPPDATA%\nbdiff\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "nbdiff";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Path of the global config file, without touching the filesystem
///
/// Returns None when the platform has no config directory.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(GLOBAL_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_path_layout() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("nbdiff/config.toml"));
        }
    }
}
