//! Dashboard page scripts: entrance animations, row links, the page loader
//! and the stats card layout.

use report_dom::{DomEvent, EventKind, NodeId};

use crate::scheduler::Task;
use crate::{Behavior, PageContext};

/// Staggered `animate-fade-in` for stats cards and quick action buttons.
#[derive(Debug, Default)]
pub struct CardAnimations;

impl CardAnimations {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for CardAnimations {
    fn name(&self) -> &'static str {
        "card-animations"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        let stagger = ctx.config.card_stagger_ms;
        let quick_delay = ctx.config.quick_button_delay_ms;

        let cards = ctx.select_all(".stats-cards .card");
        let buttons = ctx.select_all(".row .btn-lg");
        let delays = (0u64..).map(|i| i * stagger);

        for (node, delay) in cards.into_iter().zip(delays.clone()) {
            ctx.scheduler.schedule(
                delay,
                Task::AddClass {
                    node,
                    class: "animate-fade-in",
                },
            );
        }
        for (node, delay) in buttons.into_iter().zip(delays) {
            ctx.scheduler.schedule(
                quick_delay + delay,
                Task::AddClass {
                    node,
                    class: "animate-fade-in",
                },
            );
        }
    }
}

/// Beating icon while a stats card is hovered.
#[derive(Debug, Default)]
pub struct CardHover {
    cards: Vec<NodeId>,
}

impl CardHover {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for CardHover {
    fn name(&self) -> &'static str {
        "card-hover"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.cards = ctx.select_all(".stats-cards .card");
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if !self.cards.contains(&event.target) {
            return;
        }
        let Some(icon) = ctx.select_in(event.target, "i") else {
            return;
        };
        match event.kind {
            EventKind::MouseEnter => ctx.doc.add_class(icon, "fa-beat"),
            EventKind::MouseLeave => ctx.doc.remove_class(icon, "fa-beat"),
            _ => {}
        }
    }
}

/// Table rows that behave like links through `data-href`.
#[derive(Debug, Default)]
pub struct RowLinks {
    rows: Vec<NodeId>,
}

impl RowLinks {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for RowLinks {
    fn name(&self) -> &'static str {
        "row-links"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.rows = ctx.select_all("tbody tr[data-href]");
        for &row in &self.rows {
            ctx.doc.set_style(row, "cursor", "pointer");
        }
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if event.kind != EventKind::Click {
            return;
        }
        let Some(row) = ctx.listener_for(event.target, &self.rows) else {
            return;
        };
        if let Some(href) = ctx.doc.non_empty_attribute(row, "data-href").map(String::from) {
            ctx.navigate(&href);
        }
    }
}

/// Fades `#page-loader` out once the page is ready.
#[derive(Debug, Default)]
pub struct PageLoader;

impl PageLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PageLoader {
    fn name(&self) -> &'static str {
        "page-loader"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        if let Some(loader) = ctx.doc.get_element_by_id("page-loader") {
            let delay = ctx.config.page_loader_fade_ms;
            ctx.scheduler.schedule(delay, Task::FadePageLoader(loader));
        }
    }
}

/// Stacks stats cards with bottom margins on narrow viewports.
#[derive(Debug, Default)]
pub struct StatsLayout;

impl StatsLayout {
    pub fn new() -> Self {
        Self
    }

    fn apply(ctx: &mut PageContext<'_>) {
        let narrow = ctx.env.viewport_width < ctx.config.mobile_breakpoint;
        for card in ctx.select_all(".stats-cards .card") {
            if narrow {
                ctx.doc.add_class(card, "mb-3");
            } else {
                ctx.doc.remove_class(card, "mb-3");
            }
        }
    }
}

impl Behavior for StatsLayout {
    fn name(&self) -> &'static str {
        "stats-layout"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        Self::apply(ctx);
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if event.kind == EventKind::Resize {
            Self::apply(ctx);
        }
    }
}
