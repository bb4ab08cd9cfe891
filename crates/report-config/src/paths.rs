//! Configuration file paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/report-ui/`
//! - macOS: `~/Library/Application Support/report-ui/`
//! - Windows: `%APPDATA%\report-ui\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "report-ui";
pub(crate) const LOCAL_CONFIG_FILE: &str = ".report-ui.toml";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the application config directory (not created if missing)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to the local config file (in CWD)
pub fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_CONFIG_FILE))
}

/// Get path to the global config file
pub fn global_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(GLOBAL_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config_path_uses_file_name() {
        let path = local_config_path().unwrap();
        assert!(path.ends_with(LOCAL_CONFIG_FILE));
    }

    #[test]
    fn test_global_config_path_in_app_dir() {
        if let Ok(path) = global_config_path() {
            assert!(path.ends_with("report-ui/config.toml"));
        }
    }
}
