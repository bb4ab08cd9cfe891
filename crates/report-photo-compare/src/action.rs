//! Comparison Actions
//!
//! Tagged actions a comparison instance can process. Instances map incoming
//! DOM events to these through [`crate::CompareInstance::route`]; hosts may
//! also dispatch them directly.

/// One of the two image panes of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSide {
    Before,
    After,
}

impl PaneSide {
    /// The sibling pane.
    pub fn other(self) -> Self {
        match self {
            PaneSide::Before => PaneSide::After,
            PaneSide::After => PaneSide::Before,
        }
    }
}

/// Actions that can be performed on a comparison instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareAction {
    // === Panes ===
    /// Mirror the scroll offset of the given pane onto its sibling
    SyncScroll(PaneSide),
    /// The image of the given pane finished loading
    ImageLoaded(PaneSide),

    // === Zoom ===
    /// Increase the zoom level by one step
    ZoomIn,
    /// Decrease the zoom level by one step
    ZoomOut,
    /// Restore the initial zoom level and scroll both panes to the origin
    ResetZoom,

    // === Optional parts ===
    /// Apply the reveal slider's current value
    SliderInput,
    /// Present the container fullscreen
    RequestFullscreen,
    /// Activate the thumbnail at the given index
    SelectThumbnail(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(PaneSide::Before.other(), PaneSide::After);
        assert_eq!(PaneSide::After.other(), PaneSide::Before);
    }
}
