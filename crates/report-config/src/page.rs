//! Page glue timings and breakpoints

use serde::{Deserialize, Serialize};

/// Settings for the page-level behaviors (alerts, navbar, dashboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Delay before flash alerts close themselves
    pub alert_dismiss_ms: u64,
    /// Viewport width below which nav link clicks collapse the navbar
    pub navbar_breakpoint: u32,
    /// Viewport width below which dashboard cards get extra spacing
    pub mobile_breakpoint: u32,
    /// Stagger between consecutive card animations
    pub card_stagger_ms: u64,
    /// Delay before the quick access buttons start animating
    pub quick_button_delay_ms: u64,
    /// Delay before the page loader starts fading out
    pub page_loader_fade_ms: u64,
    /// Delay between the fade starting and the loader being hidden
    pub page_loader_hide_ms: u64,
    /// Minimum horizontal travel (px) recognised as a swipe
    pub swipe_threshold: i32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5000,
            navbar_breakpoint: 992,
            mobile_breakpoint: 768,
            card_stagger_ms: 100,
            quick_button_delay_ms: 500,
            page_loader_fade_ms: 300,
            page_loader_hide_ms: 500,
            swipe_threshold: 100,
        }
    }
}
