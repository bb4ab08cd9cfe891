//! Configured role selectors, parsed once per initialization.

use report_config::CompareSelectors;
use report_dom::{Selector, SelectorError};

/// Parsed selectors for every role of the comparison markup.
///
/// The structural roles (container, panes, image) are required: if any of
/// them fails to parse, [`CompiledSelectors::compile`] returns the error and
/// no instance can be discovered. Optional roles that fail to parse are
/// logged and left as `None`, which disables only that feature.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub container: Selector,
    pub before_pane: Selector,
    pub after_pane: Selector,
    pub image: Selector,
    pub zoom_in: Option<Selector>,
    pub zoom_out: Option<Selector>,
    pub zoom_reset: Option<Selector>,
    pub zoom_level: Option<Selector>,
    pub loader: Option<Selector>,
    pub slider: Option<Selector>,
    pub before_slider: Option<Selector>,
    pub after_slider: Option<Selector>,
    pub fullscreen: Option<Selector>,
    pub thumbnail: Option<Selector>,
    pub before_caption: Option<Selector>,
    pub after_caption: Option<Selector>,
}

impl CompiledSelectors {
    pub fn compile(config: &CompareSelectors) -> Result<Self, SelectorError> {
        Ok(Self {
            container: Selector::parse(&config.container)?,
            before_pane: Selector::parse(&config.before_pane)?,
            after_pane: Selector::parse(&config.after_pane)?,
            image: Selector::parse(&config.image)?,
            zoom_in: optional("zoom_in", &config.zoom_in),
            zoom_out: optional("zoom_out", &config.zoom_out),
            zoom_reset: optional("zoom_reset", &config.zoom_reset),
            zoom_level: optional("zoom_level", &config.zoom_level),
            loader: optional("loader", &config.loader),
            slider: optional("slider", &config.slider),
            before_slider: optional("before_slider", &config.before_slider),
            after_slider: optional("after_slider", &config.after_slider),
            fullscreen: optional("fullscreen", &config.fullscreen),
            thumbnail: optional("thumbnail", &config.thumbnail),
            before_caption: optional("before_caption", &config.before_caption),
            after_caption: optional("after_caption", &config.after_caption),
        })
    }
}

/// An empty selector switches the role off without a warning.
fn optional(role: &str, source: &str) -> Option<Selector> {
    if source.trim().is_empty() {
        log::debug!("Photo compare role `{}` disabled by config", role);
        return None;
    }
    match Selector::parse(source) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::warn!(
                "Ignoring photo compare selector for `{}` ({}): {}",
                role,
                source,
                e
            );
            None
        }
    }
}
