use thiserror::Error;

/// Errors found while validating a loaded configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The TOML text could not be deserialized.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Zoom bounds are inverted.
    #[error("Zoom minimum {min} is greater than maximum {max}")]
    ZoomBounds { min: u16, max: u16 },

    /// Initial zoom lies outside the configured bounds.
    #[error("Initial zoom {initial} is outside {min}..={max}")]
    ZoomInitial { initial: u16, min: u16, max: u16 },

    /// A zero step would make the zoom buttons inert.
    #[error("Zoom step must be greater than zero")]
    ZoomStep,

    /// A selector for a required role is empty.
    #[error("Selector for `{0}` must not be empty")]
    EmptySelector(&'static str),
}
