//! The seam page scripts plug into.

use report_config::PageConfig;
use report_dom::{Document, DomEvent, NodeId};

use crate::{DialogHost, Environment, Scheduler};

/// Everything a behavior may read or change while it runs.
pub struct PageContext<'a> {
    pub doc: &'a mut Document,
    pub env: &'a Environment,
    pub config: &'a PageConfig,
    pub scheduler: &'a mut Scheduler,
    pub dialogs: &'a mut dyn DialogHost,
    pub(crate) history: &'a mut Vec<String>,
}

impl PageContext<'_> {
    /// Send the browser to `url`, like assigning `window.location.href`.
    pub fn navigate(&mut self, url: &str) {
        log::info!("Navigating to {}", url);
        self.history.push(url.to_string());
    }

    /// All elements matching `selector` in the whole document.
    ///
    /// Behaviors only use literal selectors, so a parse failure is a bug
    /// worth a warning rather than an error path.
    pub fn select_all(&self, selector: &str) -> Vec<NodeId> {
        self.doc
            .query_selector_all(self.doc.root(), selector)
            .unwrap_or_else(|e| {
                log::warn!("Bad selector {:?}: {}", selector, e);
                Vec::new()
            })
    }

    /// First element matching `selector` in the whole document.
    pub fn select_first(&self, selector: &str) -> Option<NodeId> {
        self.select_all(selector).into_iter().next()
    }

    /// First descendant of `scope` matching `selector`.
    pub fn select_in(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.doc
            .query_selector(scope, selector)
            .unwrap_or_else(|e| {
                log::warn!("Bad selector {:?}: {}", selector, e);
                None
            })
    }

    /// Nearest inclusive ancestor of `node` that is one of `candidates`.
    ///
    /// Models a listener attached to each candidate receiving bubbled events.
    pub fn listener_for(&self, node: NodeId, candidates: &[NodeId]) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if candidates.contains(&n) {
                return Some(n);
            }
            current = self.doc.parent(n);
        }
        None
    }

    /// Nearest inclusive ancestor of `node` matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        match report_dom::Selector::parse(selector) {
            Ok(selector) => self.doc.closest(node, &selector),
            Err(e) => {
                log::warn!("Bad selector {:?}: {}", selector, e);
                None
            }
        }
    }
}

/// A page script: installs itself when the document is ready, then reacts
/// to events.
///
/// Every installed behavior sees every event, in installation order.
/// Behaviors that model document-level listeners must skip events whose
/// propagation was stopped by an element-level listener.
pub trait Behavior {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Run once when the document is ready.
    fn install(&mut self, ctx: &mut PageContext<'_>);

    /// React to an event. Call [`DomEvent::prevent_default`] to cancel the
    /// host's default action.
    fn handle_event(&mut self, _event: &mut DomEvent, _ctx: &mut PageContext<'_>) {}
}
