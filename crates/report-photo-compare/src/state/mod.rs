//! Per-instance state for the comparison widget.

mod preload;
mod thumbnails;
mod zoom;

pub use preload::PreloadGate;
pub use thumbnails::ThumbnailData;
pub use zoom::ZoomState;
