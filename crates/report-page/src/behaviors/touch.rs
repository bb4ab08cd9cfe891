//! Touch feedback and the swipe-back gesture.

use report_dom::{DomEvent, EventKind, NodeId};

use crate::{Behavior, PageContext};

/// Presses card buttons in slightly while touched. Touch devices only.
#[derive(Debug, Default)]
pub struct TouchFeedback {
    buttons: Vec<NodeId>,
}

impl TouchFeedback {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for TouchFeedback {
    fn name(&self) -> &'static str {
        "touch-feedback"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        if ctx.env.is_touch_device() {
            self.buttons = ctx.select_all(".card-body a.btn");
        }
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        let Some(button) = ctx.listener_for(event.target, &self.buttons) else {
            return;
        };
        match event.kind {
            EventKind::TouchStart { .. } => ctx.doc.set_style(button, "transform", "scale(0.97)"),
            EventKind::TouchEnd { .. } => ctx.doc.set_style(button, "transform", "scale(1)"),
            _ => {}
        }
    }
}

/// A rightward swipe across the page follows the `.nav-back` link. Touch
/// devices only.
#[derive(Debug, Default)]
pub struct SwipeBack {
    enabled: bool,
    start_x: Option<i32>,
}

impl SwipeBack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for SwipeBack {
    fn name(&self) -> &'static str {
        "swipe-back"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.enabled = ctx.env.is_touch_device();
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        // Listens on the document, so stopped touches never arrive
        if !self.enabled || event.is_propagation_stopped() {
            return;
        }
        match event.kind {
            EventKind::TouchStart { screen_x } => self.start_x = Some(screen_x),
            EventKind::TouchEnd { screen_x } => {
                let Some(start_x) = self.start_x.take() else {
                    return;
                };
                if screen_x - start_x > ctx.config.swipe_threshold {
                    if let Some(back) = ctx.select_first(".nav-back") {
                        log::debug!("Swipe back from x={} to x={}", start_x, screen_x);
                        ctx.doc.click(back);
                    }
                }
            }
            _ => {}
        }
    }
}
