//! Configuration for the cleaning report presentation layer
//!
//! This crate provides:
//! - Config file discovery (local `.report-ui.toml`, then the global config dir)
//! - Photo comparison settings (zoom bounds, markup contract selectors)
//! - Page glue timings and breakpoints
//! - The top level [`UiConfig`] that ties them together

pub mod config_file;
pub mod error;
pub mod page;
pub mod paths;
pub mod photo_compare;
pub mod ui_config;

pub use config_file::load_config_file;
pub use error::ConfigError;
pub use page::PageConfig;
pub use photo_compare::{CompareSelectors, PhotoCompareConfig, ZoomConfig};
pub use ui_config::UiConfig;
