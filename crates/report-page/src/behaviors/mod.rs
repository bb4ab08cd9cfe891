//! The page scripts, grouped the way the report pages load them.

mod alerts;
mod dashboard;
mod device;
mod forms;
mod ios_dropdown;
mod navbar;
mod tables;
mod touch;
mod widgets;

pub use alerts::{AlertDismiss, ConfirmButtons};
pub use dashboard::{CardAnimations, CardHover, PageLoader, RowLinks, StatsLayout};
pub use device::DeviceDetection;
pub use forms::{form_is_valid, FormValidation, ImagePreview};
pub use ios_dropdown::IosDropdowns;
pub use navbar::Navbar;
pub use tables::ResponsiveTables;
pub use touch::{SwipeBack, TouchFeedback};
pub use widgets::{Popovers, Tooltips};

use crate::Behavior;

/// Scripts every page loads.
pub fn main_scripts() -> Vec<Box<dyn Behavior>> {
    vec![
        Box::new(Tooltips::new()),
        Box::new(Popovers::new()),
        Box::new(AlertDismiss::new()),
        Box::new(ConfirmButtons::new()),
        Box::new(FormValidation::new()),
        Box::new(ImagePreview::new()),
        Box::new(ResponsiveTables::new()),
        Box::new(DeviceDetection::new()),
        Box::new(Navbar::new()),
        Box::new(IosDropdowns::new()),
    ]
}

/// Scripts of the dashboard page.
pub fn dashboard_scripts() -> Vec<Box<dyn Behavior>> {
    vec![
        Box::new(CardAnimations::new()),
        Box::new(CardHover::new()),
        Box::new(RowLinks::new()),
        Box::new(PageLoader::new()),
        Box::new(StatsLayout::new()),
        Box::new(TouchFeedback::new()),
        Box::new(SwipeBack::new()),
    ]
}
