//! Fullscreen request variants offered by hosts.

/// One way of asking the host to present an element fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenApi {
    /// `requestFullscreen`
    Standard,
    /// `mozRequestFullScreen` (Firefox)
    Moz,
    /// `webkitRequestFullscreen` (Chrome, Safari, Opera)
    Webkit,
    /// `msRequestFullscreen` (IE/Edge)
    Ms,
}

impl FullscreenApi {
    /// Order in which the variants are tried.
    pub const PRIORITY: [FullscreenApi; 4] = [
        FullscreenApi::Standard,
        FullscreenApi::Moz,
        FullscreenApi::Webkit,
        FullscreenApi::Ms,
    ];
}
