//! Bootstrap tooltips and popovers.

use report_dom::{DomEvent, EventKind, NodeId};

use crate::{Behavior, PageContext};

/// Hover tooltips for `[data-bs-toggle="tooltip"]`.
///
/// On install the trigger's `title` moves to `data-bs-original-title` so the
/// native tooltip does not show as well.
#[derive(Debug, Default)]
pub struct Tooltips {
    triggers: Vec<NodeId>,
    shown: Vec<(NodeId, NodeId)>,
    next_id: usize,
}

impl Tooltips {
    pub fn new() -> Self {
        Self::default()
    }

    fn show(&mut self, ctx: &mut PageContext<'_>, trigger: NodeId) {
        if self.shown.iter().any(|&(t, _)| t == trigger) {
            return;
        }
        let title = ctx
            .doc
            .non_empty_attribute(trigger, "data-bs-original-title")
            .or_else(|| ctx.doc.non_empty_attribute(trigger, "data-bs-title"))
            .map(String::from);
        let Some(title) = title else {
            return;
        };

        let id = format!("tooltip{}", self.next_id);
        self.next_id += 1;

        let tip = ctx.doc.create_element("div");
        ctx.doc.set_attribute(tip, "class", "tooltip show");
        ctx.doc.set_attribute(tip, "role", "tooltip");
        ctx.doc.set_attribute(tip, "id", &id);
        let inner = ctx.doc.create_element("div");
        ctx.doc.add_class(inner, "tooltip-inner");
        ctx.doc.set_text(inner, &title);
        ctx.doc.append_child(tip, inner);
        let body = ctx.doc.body();
        ctx.doc.append_child(body, tip);

        ctx.doc.set_attribute(trigger, "aria-describedby", &id);
        self.shown.push((trigger, tip));
    }

    fn hide(&mut self, ctx: &mut PageContext<'_>, trigger: NodeId) {
        let Some(index) = self.shown.iter().position(|&(t, _)| t == trigger) else {
            return;
        };
        let (_, tip) = self.shown.remove(index);
        ctx.doc.detach(tip);
        ctx.doc.remove_attribute(trigger, "aria-describedby");
    }
}

impl Behavior for Tooltips {
    fn name(&self) -> &'static str {
        "tooltips"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.triggers = ctx.select_all(r#"[data-bs-toggle="tooltip"]"#);
        for &trigger in &self.triggers {
            if let Some(title) = ctx.doc.non_empty_attribute(trigger, "title").map(String::from) {
                ctx.doc.set_attribute(trigger, "data-bs-original-title", &title);
                ctx.doc.remove_attribute(trigger, "title");
            }
        }
        log::debug!("Initialized {} tooltip(s)", self.triggers.len());
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if !self.triggers.contains(&event.target) {
            return;
        }
        match event.kind {
            EventKind::MouseEnter => self.show(ctx, event.target),
            EventKind::MouseLeave => self.hide(ctx, event.target),
            _ => {}
        }
    }
}

/// Click-toggled popovers for `[data-bs-toggle="popover"]`.
#[derive(Debug, Default)]
pub struct Popovers {
    triggers: Vec<NodeId>,
    shown: Vec<(NodeId, NodeId)>,
    next_id: usize,
}

impl Popovers {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle(&mut self, ctx: &mut PageContext<'_>, trigger: NodeId) {
        if let Some(index) = self.shown.iter().position(|&(t, _)| t == trigger) {
            let (_, popover) = self.shown.remove(index);
            ctx.doc.detach(popover);
            ctx.doc.remove_attribute(trigger, "aria-describedby");
            return;
        }

        let id = format!("popover{}", self.next_id);
        self.next_id += 1;

        let popover = ctx.doc.create_element("div");
        ctx.doc.set_attribute(popover, "class", "popover show");
        ctx.doc.set_attribute(popover, "role", "tooltip");
        ctx.doc.set_attribute(popover, "id", &id);

        let title = ctx
            .doc
            .non_empty_attribute(trigger, "data-bs-title")
            .or_else(|| ctx.doc.non_empty_attribute(trigger, "title"))
            .map(String::from);
        if let Some(title) = title {
            let header = ctx.doc.create_element("h3");
            ctx.doc.add_class(header, "popover-header");
            ctx.doc.set_text(header, &title);
            ctx.doc.append_child(popover, header);
        }

        let content = ctx
            .doc
            .attribute(trigger, "data-bs-content")
            .unwrap_or_default()
            .to_string();
        let body = ctx.doc.create_element("div");
        ctx.doc.add_class(body, "popover-body");
        ctx.doc.set_text(body, &content);
        ctx.doc.append_child(popover, body);

        let page_body = ctx.doc.body();
        ctx.doc.append_child(page_body, popover);
        ctx.doc.set_attribute(trigger, "aria-describedby", &id);
        self.shown.push((trigger, popover));
    }
}

impl Behavior for Popovers {
    fn name(&self) -> &'static str {
        "popovers"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.triggers = ctx.select_all(r#"[data-bs-toggle="popover"]"#);
        log::debug!("Initialized {} popover(s)", self.triggers.len());
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if event.kind != EventKind::Click {
            return;
        }
        if let Some(trigger) = ctx.listener_for(event.target, &self.triggers) {
            self.toggle(ctx, trigger);
        }
    }
}
