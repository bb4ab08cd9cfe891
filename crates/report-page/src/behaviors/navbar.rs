//! Collapsible navbar on small screens.

use report_dom::{DomEvent, EventKind, NodeId};

use crate::{Behavior, PageContext};

/// Toggles the navbar collapse and closes it after a link is followed on
/// narrow viewports.
#[derive(Debug, Default)]
pub struct Navbar {
    toggler: Option<NodeId>,
    links: Vec<NodeId>,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    fn collapse_target(ctx: &PageContext<'_>, toggler: NodeId) -> Option<NodeId> {
        ctx.doc
            .non_empty_attribute(toggler, "data-bs-target")
            .and_then(|target| ctx.select_first(target))
            .or_else(|| ctx.select_first(".navbar-collapse"))
    }

    fn toggle(ctx: &mut PageContext<'_>, toggler: NodeId) {
        let Some(collapse) = Self::collapse_target(ctx, toggler) else {
            return;
        };
        let open = ctx.doc.toggle_class(collapse, "show");
        ctx.doc
            .set_attribute(toggler, "aria-expanded", if open { "true" } else { "false" });
        log::debug!("Navbar {}", if open { "opened" } else { "closed" });
    }
}

impl Behavior for Navbar {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.toggler = ctx.select_first(".navbar-toggler");
        self.links = ctx.select_all(".navbar-nav .nav-link:not(.dropdown-toggle)");
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if event.kind != EventKind::Click {
            return;
        }
        let Some(toggler) = self.toggler else {
            return;
        };

        if ctx.listener_for(event.target, &[toggler]).is_some() {
            Self::toggle(ctx, toggler);
            return;
        }

        if ctx.listener_for(event.target, &self.links).is_none() {
            return;
        }
        if ctx.env.viewport_width < ctx.config.navbar_breakpoint
            && ctx.select_first(".navbar-collapse.show").is_some()
        {
            ctx.doc.click(toggler);
        }
    }
}
