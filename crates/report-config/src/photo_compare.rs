//! Photo comparison widget settings
//!
//! The selectors describe the markup contract: which elements play which role
//! inside a comparison container. Defaults match the report templates.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Settings for the photo comparison widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCompareConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub selectors: CompareSelectors,
}

impl PhotoCompareConfig {
    /// Check zoom bounds and the selectors discovery depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zoom.validate()?;
        self.selectors.validate()
    }
}

/// Zoom bounds, in percent of the pane width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomConfig {
    #[serde(default = "default_zoom_initial")]
    pub initial: u16,
    #[serde(default = "default_zoom_min")]
    pub min: u16,
    #[serde(default = "default_zoom_max")]
    pub max: u16,
    #[serde(default = "default_zoom_step")]
    pub step: u16,
}

fn default_zoom_initial() -> u16 {
    100
}

fn default_zoom_min() -> u16 {
    50
}

fn default_zoom_max() -> u16 {
    200
}

fn default_zoom_step() -> u16 {
    10
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            initial: default_zoom_initial(),
            min: default_zoom_min(),
            max: default_zoom_max(),
            step: default_zoom_step(),
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::ZoomBounds {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.min..=self.max).contains(&self.initial) {
            return Err(ConfigError::ZoomInitial {
                initial: self.initial,
                min: self.min,
                max: self.max,
            });
        }
        if self.step == 0 {
            return Err(ConfigError::ZoomStep);
        }
        Ok(())
    }
}

/// CSS selectors identifying each role of the comparison markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareSelectors {
    pub container: String,
    pub before_pane: String,
    pub after_pane: String,
    pub image: String,
    pub zoom_in: String,
    pub zoom_out: String,
    pub zoom_reset: String,
    pub zoom_level: String,
    pub loader: String,
    pub slider: String,
    pub before_slider: String,
    pub after_slider: String,
    pub fullscreen: String,
    pub thumbnail: String,
    pub before_caption: String,
    pub after_caption: String,
}

impl Default for CompareSelectors {
    fn default() -> Self {
        Self {
            container: ".photo-compare-container".to_string(),
            before_pane: ".before-photo".to_string(),
            after_pane: ".after-photo".to_string(),
            image: "img".to_string(),
            zoom_in: ".zoom-in".to_string(),
            zoom_out: ".zoom-out".to_string(),
            zoom_reset: ".reset-zoom".to_string(),
            zoom_level: ".zoom-level".to_string(),
            loader: ".photo-compare-loader".to_string(),
            slider: ".comparison-slider".to_string(),
            before_slider: ".before-photo-slider".to_string(),
            after_slider: ".after-photo-slider".to_string(),
            fullscreen: ".fullscreen-btn".to_string(),
            thumbnail: ".photo-thumbnail".to_string(),
            before_caption: ".before-caption".to_string(),
            after_caption: ".after-caption".to_string(),
        }
    }
}

impl CompareSelectors {
    /// Only the selectors discovery cannot work without are checked; an empty
    /// optional selector simply never matches.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("container", &self.container),
            ("before_pane", &self.before_pane),
            ("after_pane", &self.after_pane),
            ("image", &self.image),
        ];
        for (role, selector) in required {
            if selector.trim().is_empty() {
                return Err(ConfigError::EmptySelector(role));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zoom_is_valid() {
        let zoom = ZoomConfig::default();
        assert_eq!((zoom.initial, zoom.min, zoom.max, zoom.step), (100, 50, 200, 10));
        assert!(zoom.validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let zoom = ZoomConfig {
            min: 300,
            ..ZoomConfig::default()
        };
        assert_eq!(
            zoom.validate(),
            Err(ConfigError::ZoomBounds { min: 300, max: 200 })
        );
    }

    #[test]
    fn test_initial_outside_bounds_rejected() {
        let zoom = ZoomConfig {
            initial: 20,
            ..ZoomConfig::default()
        };
        assert!(matches!(
            zoom.validate(),
            Err(ConfigError::ZoomInitial { initial: 20, .. })
        ));
    }

    #[test]
    fn test_zero_step_rejected() {
        let zoom = ZoomConfig {
            step: 0,
            ..ZoomConfig::default()
        };
        assert_eq!(zoom.validate(), Err(ConfigError::ZoomStep));
    }

    #[test]
    fn test_empty_container_selector_rejected() {
        let selectors = CompareSelectors {
            container: "  ".to_string(),
            ..CompareSelectors::default()
        };
        assert_eq!(
            selectors.validate(),
            Err(ConfigError::EmptySelector("container"))
        );
    }

    #[test]
    fn test_empty_optional_selector_allowed() {
        let selectors = CompareSelectors {
            fullscreen: String::new(),
            ..CompareSelectors::default()
        };
        assert!(selectors.validate().is_ok());
    }
}
