use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::paths;

/// Load config file content from CWD first, then the global config dir
///
/// Searches for:
/// 1. `.report-ui.toml` in the current working directory
/// 2. `config.toml` in the platform config dir (`~/.config/report-ui/` on Linux)
///
/// Returns the path and content of the first file found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let candidates = [paths::local_config_path(), paths::global_config_path()];

    for candidate in candidates.into_iter().flatten() {
        if !candidate.exists() {
            continue;
        }
        match read_config_file(&candidate) {
            Ok(content) => {
                log::debug!("Loaded config from {}", candidate.display());
                return Some((candidate, content));
            }
            Err(e) => log::warn!("{:#}", e),
        }
    }

    None
}

/// Read a single config file
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file ({})", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_has_context() {
        let err = read_config_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.toml"));
    }
}
