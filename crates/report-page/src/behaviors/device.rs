//! Body classes describing the device.

use crate::{Behavior, PageContext};

/// Adds `ios-device` and `touch-device` to `body` so stylesheets can adapt.
#[derive(Debug, Default)]
pub struct DeviceDetection;

impl DeviceDetection {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for DeviceDetection {
    fn name(&self) -> &'static str {
        "device-detection"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        let body = ctx.doc.body();
        if ctx.env.is_ios() {
            ctx.doc.add_class(body, "ios-device");
        }
        if ctx.env.is_touch_device() {
            ctx.doc.add_class(body, "touch-device");
        }
    }
}
