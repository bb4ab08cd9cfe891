//! Events emitted by comparison instances after applying an action.

use report_dom::{FullscreenApi, ScrollOffset};

use crate::PaneSide;

/// What an action changed in the document.
///
/// Actions that turn out to be no-ops (zooming past a bound, a thumbnail
/// without both URLs, a scroll echo) emit nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareEvent {
    /// The sibling of `from` was moved to `offset`.
    ScrollSynced {
        from: PaneSide,
        offset: ScrollOffset,
    },

    /// Both images were resized to the new zoom level (percent).
    ZoomChanged(u16),

    /// Both images completed and the loader was hidden.
    Loaded,

    /// The before slider container was resized to this width (percent).
    RevealChanged(f64),

    /// The container was presented fullscreen through this API.
    FullscreenRequested(FullscreenApi),

    /// The thumbnail at this index became active and its photos were shown.
    ThumbnailActivated(usize),
}

/// A [`CompareEvent`] tagged with the index of the instance that emitted it.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceEvent {
    pub instance: usize,
    pub event: CompareEvent,
}

impl InstanceEvent {
    pub fn new(instance: usize, event: CompareEvent) -> Self {
        Self { instance, event }
    }
}
