//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/dbug-overlay/`, `~/.cache/dbug-overlay/`
//! - macOS: `~/Library/Application Support/dbug-overlay/`, `~/Library/Caches/dbug-overlay/`
//! - Windows: `%APPDATA%\dbug-overlay\`, `%LOCALAPPDATA%\dbug-overlay\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "dbug-overlay";

/// Get the application config directory (not created)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        // Environments without a config dir are fine, there is nothing to check
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("dbug-overlay/config.toml"));
        }
    }

    #[test]
    fn test_cache_dir_exists() {
        if let Ok(dir) = cache_dir() {
            assert!(dir.exists());
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
