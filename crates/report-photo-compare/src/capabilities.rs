//! Optional parts of a comparison container
//!
//! Only the two panes and their images are required. Everything else the
//! markup may or may not provide; each instance records what it found in a
//! [`CompareParts`] and summarizes it as [`CompareCapabilities`], so routing
//! and tests can ask "does this instance have a slider?" without looking at
//! the document again.

use bitflags::bitflags;
use report_dom::{Document, NodeId, Selector};

use crate::CompiledSelectors;

bitflags! {
    /// Features a comparison instance supports
    ///
    /// Scroll synchronization and preload gating are always available and
    /// therefore have no flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CompareCapabilities: u32 {
        /// A `.zoom-in` button
        const ZOOM_IN = 1 << 0;

        /// A `.zoom-out` button
        const ZOOM_OUT = 1 << 1;

        /// A `.reset-zoom` button
        const ZOOM_RESET = 1 << 2;

        /// A `.zoom-level` indicator showing the current percentage
        const ZOOM_INDICATOR = 1 << 3;

        /// A `.photo-compare-loader` hidden once both photos are loaded
        const LOADER = 1 << 4;

        /// A reveal slider together with both slider containers
        const REVEAL_SLIDER = 1 << 5;

        /// A `.fullscreen-btn` button
        const FULLSCREEN = 1 << 6;

        /// At least one `.photo-thumbnail`
        const THUMBNAILS = 1 << 7;

        /// A `.before-caption` element
        const BEFORE_CAPTION = 1 << 8;

        /// An `.after-caption` element
        const AFTER_CAPTION = 1 << 9;
    }
}

impl Default for CompareCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

/// The reveal slider and the two containers it resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderParts {
    pub input: NodeId,
    pub before: NodeId,
    pub after: NodeId,
}

/// Optional elements found inside one container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareParts {
    pub zoom_in: Option<NodeId>,
    pub zoom_out: Option<NodeId>,
    pub zoom_reset: Option<NodeId>,
    pub zoom_level: Option<NodeId>,
    pub loader: Option<NodeId>,
    pub slider: Option<SliderParts>,
    pub fullscreen: Option<NodeId>,
    pub before_caption: Option<NodeId>,
    pub after_caption: Option<NodeId>,
    /// In document order.
    pub thumbnails: Vec<NodeId>,
}

impl CompareParts {
    /// Look up every optional part inside `container`.
    pub fn discover(doc: &Document, container: NodeId, selectors: &CompiledSelectors) -> Self {
        let find = |selector: &Option<Selector>| {
            selector
                .as_ref()
                .and_then(|selector| doc.select_first(container, selector))
        };

        let slider = match (
            find(&selectors.slider),
            find(&selectors.before_slider),
            find(&selectors.after_slider),
        ) {
            (Some(input), Some(before), Some(after)) => Some(SliderParts {
                input,
                before,
                after,
            }),
            (Some(_), _, _) => {
                log::debug!("Reveal slider without both slider containers, ignoring");
                None
            }
            _ => None,
        };

        let thumbnails = selectors
            .thumbnail
            .as_ref()
            .map(|selector| doc.select_all(container, selector))
            .unwrap_or_default();

        Self {
            zoom_in: find(&selectors.zoom_in),
            zoom_out: find(&selectors.zoom_out),
            zoom_reset: find(&selectors.zoom_reset),
            zoom_level: find(&selectors.zoom_level),
            loader: find(&selectors.loader),
            slider,
            fullscreen: find(&selectors.fullscreen),
            before_caption: find(&selectors.before_caption),
            after_caption: find(&selectors.after_caption),
            thumbnails,
        }
    }

    pub fn capabilities(&self) -> CompareCapabilities {
        let mut caps = CompareCapabilities::empty();
        caps.set(CompareCapabilities::ZOOM_IN, self.zoom_in.is_some());
        caps.set(CompareCapabilities::ZOOM_OUT, self.zoom_out.is_some());
        caps.set(CompareCapabilities::ZOOM_RESET, self.zoom_reset.is_some());
        caps.set(CompareCapabilities::ZOOM_INDICATOR, self.zoom_level.is_some());
        caps.set(CompareCapabilities::LOADER, self.loader.is_some());
        caps.set(CompareCapabilities::REVEAL_SLIDER, self.slider.is_some());
        caps.set(CompareCapabilities::FULLSCREEN, self.fullscreen.is_some());
        caps.set(CompareCapabilities::THUMBNAILS, !self.thumbnails.is_empty());
        caps.set(
            CompareCapabilities::BEFORE_CAPTION,
            self.before_caption.is_some(),
        );
        caps.set(
            CompareCapabilities::AFTER_CAPTION,
            self.after_caption.is_some(),
        );
        caps
    }
}
