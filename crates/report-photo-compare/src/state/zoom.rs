//! Shared zoom level of both panes.

use report_config::ZoomConfig;

/// Zoom percentage applied to both images of an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomState {
    level: u16,
    bounds: ZoomConfig,
}

impl ZoomState {
    pub fn new(bounds: ZoomConfig) -> Self {
        Self {
            level: bounds.initial,
            bounds,
        }
    }

    /// Current zoom level in percent.
    pub fn level(&self) -> u16 {
        self.level
    }

    /// Step up, clamped to the maximum. Returns whether the level changed.
    pub fn zoom_in(&mut self) -> bool {
        let next = self
            .level
            .saturating_add(self.bounds.step)
            .min(self.bounds.max);
        self.set_level(next)
    }

    /// Step down, clamped to the minimum. Returns whether the level changed.
    pub fn zoom_out(&mut self) -> bool {
        let next = self
            .level
            .saturating_sub(self.bounds.step)
            .max(self.bounds.min);
        self.set_level(next)
    }

    fn set_level(&mut self, next: u16) -> bool {
        let changed = next != self.level;
        self.level = next;
        changed
    }

    /// Back to the initial level.
    pub fn reset(&mut self) {
        self.level = self.bounds.initial;
    }

    /// CSS width for both images.
    pub fn css_width(&self) -> String {
        format!("{}%", self.level)
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}
