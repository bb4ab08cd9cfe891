//! Top level configuration
//!
//! Loaded from `.report-ui.toml` (CWD) or the global config dir.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, PageConfig, PhotoCompareConfig};

/// Configuration for every presentation component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub photo_compare: PhotoCompareConfig,

    #[serde(default)]
    pub page: PageConfig,
}

impl UiConfig {
    /// Load config from CWD first, then the global config dir, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded UI config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Ignoring config file {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("Using default UI config");
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.photo_compare.validate()
    }
}
