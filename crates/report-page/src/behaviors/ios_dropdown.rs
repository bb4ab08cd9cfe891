//! Touch-friendly navbar dropdowns for iOS Safari.
//!
//! Bootstrap's dropdown plugin relies on click events that iOS does not
//! deliver reliably inside a collapsed navbar, so on iOS the toggles are
//! taken over and driven from touch-start instead.

use report_dom::{DomEvent, EventKind, NodeId};

use crate::{Behavior, PageContext};

/// Inline styles forcing an opened menu to render inside the collapse.
const OPEN_MENU_STYLE: &[(&str, &str)] = &[
    ("display", "block"),
    ("visibility", "visible"),
    ("opacity", "1"),
    ("position", "static"),
    ("background-color", "rgba(0, 0, 0, 0.8)"),
    ("border", "1px solid rgba(255, 255, 255, 0.2)"),
    ("border-radius", "0.5rem"),
    ("padding", "0.5rem"),
    ("margin-top", "0.5rem"),
];

#[derive(Debug, Default)]
pub struct IosDropdowns {
    enabled: bool,
    toggles: Vec<NodeId>,
    armed_items: Vec<NodeId>,
}

impl IosDropdowns {
    pub fn new() -> Self {
        Self::default()
    }

    fn menu_of(ctx: &PageContext<'_>, dropdown: NodeId) -> Option<NodeId> {
        ctx.select_in(dropdown, ".dropdown-menu")
    }

    fn close_all(&self, ctx: &mut PageContext<'_>) {
        for dropdown in ctx.select_all(".navbar-nav .dropdown") {
            ctx.doc.remove_class(dropdown, "show");
            if let Some(menu) = Self::menu_of(ctx, dropdown) {
                ctx.doc.remove_class(menu, "show");
            }
            if let Some(toggle) = ctx.select_in(dropdown, ".dropdown-toggle") {
                ctx.doc.set_attribute(toggle, "aria-expanded", "false");
            }
        }
    }

    fn on_toggle(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>, toggle: NodeId) {
        event.prevent_default();
        event.stop_propagation();

        if let Some(collapse) = ctx.select_first(".navbar-collapse") {
            if !ctx.doc.has_class(collapse, "show") {
                ctx.doc.add_class(collapse, "show");
            }
        }

        let Some(dropdown) = ctx.closest(toggle, ".dropdown") else {
            return;
        };
        let Some(menu) = Self::menu_of(ctx, dropdown) else {
            return;
        };
        let was_open = ctx.doc.has_class(dropdown, "show");

        self.close_all(ctx);
        if was_open {
            return;
        }

        ctx.doc.add_class(dropdown, "show");
        ctx.doc.add_class(menu, "show");
        ctx.doc.set_attribute(toggle, "aria-expanded", "true");
        for (property, value) in OPEN_MENU_STYLE {
            ctx.doc.set_style(menu, property, value);
        }

        for item in ctx.doc.descendants(menu) {
            if ctx.doc.has_class(item, "dropdown-item") && !self.armed_items.contains(&item) {
                self.armed_items.push(item);
            }
        }
        log::debug!("Opened dropdown {:?}", dropdown);
    }

    fn on_item(event: &mut DomEvent, ctx: &mut PageContext<'_>, item: NodeId) {
        event.stop_propagation();
        if event.kind == EventKind::Click {
            // Navigation happens below, not through the link's default action
            event.prevent_default();
        }
        let href = ctx.doc.attribute(item, "href").unwrap_or_default().to_string();
        if !href.is_empty() && href != "#" {
            ctx.navigate(&href);
        }
    }
}

impl Behavior for IosDropdowns {
    fn name(&self) -> &'static str {
        "ios-dropdowns"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.enabled = ctx.env.is_ios();
        if !self.enabled {
            return;
        }
        self.toggles = ctx.select_all(".navbar-nav .dropdown-toggle");
        for &toggle in &self.toggles {
            ctx.doc.remove_attribute(toggle, "data-bs-toggle");
        }
        log::debug!("Took over {} dropdown toggle(s)", self.toggles.len());
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if !self.enabled {
            return;
        }
        let is_touch_start = matches!(event.kind, EventKind::TouchStart { .. });

        if is_touch_start {
            if let Some(toggle) = ctx.listener_for(event.target, &self.toggles) {
                self.on_toggle(event, ctx, toggle);
                return;
            }
        }

        if is_touch_start || event.kind == EventKind::Click {
            if let Some(item) = ctx.listener_for(event.target, &self.armed_items) {
                Self::on_item(event, ctx, item);
                return;
            }
        }

        // Document-level listener: tapping outside closes open menus
        if is_touch_start && !event.is_propagation_stopped() {
            if ctx.doc.has_class(event.target, "dropdown-item") {
                return;
            }
            if ctx.closest(event.target, ".navbar-nav .dropdown").is_none() {
                self.close_all(ctx);
            }
        }
    }
}
