//! Flash messages and confirmation prompts.

use report_dom::{DomEvent, EventKind, NodeId};

use crate::scheduler::Task;
use crate::{Behavior, PageContext};

/// Closes every `.alert` present at load after the configured delay.
#[derive(Debug, Default)]
pub struct AlertDismiss;

impl AlertDismiss {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for AlertDismiss {
    fn name(&self) -> &'static str {
        "alert-dismiss"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        let delay = ctx.config.alert_dismiss_ms;
        for alert in ctx.select_all(".alert") {
            ctx.scheduler.schedule(delay, Task::CloseAlert(alert));
        }
    }
}

/// Asks for confirmation before following `[data-confirm]` elements.
#[derive(Debug, Default)]
pub struct ConfirmButtons {
    buttons: Vec<NodeId>,
}

impl ConfirmButtons {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for ConfirmButtons {
    fn name(&self) -> &'static str {
        "confirm-buttons"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.buttons = ctx.select_all("[data-confirm]");
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if event.kind != EventKind::Click {
            return;
        }
        let Some(button) = ctx.listener_for(event.target, &self.buttons) else {
            return;
        };
        let message = ctx
            .doc
            .attribute(button, "data-confirm")
            .unwrap_or_default()
            .to_string();
        if !ctx.dialogs.confirm(&message) {
            log::debug!("Confirmation declined: {}", message);
            event.prevent_default();
        }
    }
}
