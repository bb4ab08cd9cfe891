//! Page-level controller owning every comparison instance.

use report_config::{PhotoCompareConfig, ZoomConfig};
use report_dom::{Document, DomEvent};

use crate::{CompareInstance, CompiledSelectors, InstanceEvent};

/// Upper bound on the events [`PhotoCompare::pump`] processes in one call.
pub const DEFAULT_EVENT_BUDGET: usize = 1024;

/// All comparison instances of one document, in document order.
#[derive(Debug, Clone)]
pub struct PhotoCompare {
    instances: Vec<CompareInstance>,
    event_budget: usize,
}

impl Default for PhotoCompare {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            event_budget: DEFAULT_EVENT_BUDGET,
        }
    }
}

impl PhotoCompare {
    /// Discover every comparison container in `doc` and attach to it.
    ///
    /// Containers missing a pane or a pane image are skipped. A required
    /// selector that does not parse leaves the controller empty. Invalid
    /// zoom bounds are replaced by the defaults.
    pub fn initialize(doc: &mut Document, config: &PhotoCompareConfig) -> Self {
        let mut controller = Self::default();

        let zoom = match config.zoom.validate() {
            Ok(()) => config.zoom,
            Err(e) => {
                log::warn!("Ignoring photo compare zoom settings: {}", e);
                ZoomConfig::default()
            }
        };

        let selectors = match CompiledSelectors::compile(&config.selectors) {
            Ok(selectors) => selectors,
            Err(e) => {
                log::warn!("Photo compare disabled, invalid selector: {}", e);
                return controller;
            }
        };

        let containers = doc.select_all(doc.root(), &selectors.container);
        for container in containers {
            let index = controller.instances.len();
            match CompareInstance::attach(doc, index, container, &selectors, zoom) {
                Some(instance) => controller.instances.push(instance),
                None => log::debug!(
                    "Skipping photo compare container {:?}: missing pane or image",
                    container
                ),
            }
        }

        log::info!(
            "Photo compare initialized {} instance(s)",
            controller.instances.len()
        );
        controller
    }

    /// Change how many events one [`PhotoCompare::pump`] call may process.
    pub fn with_event_budget(mut self, budget: usize) -> Self {
        self.event_budget = budget.max(1);
        self
    }

    pub fn instances(&self) -> &[CompareInstance] {
        &self.instances
    }

    pub fn instance(&self, index: usize) -> Option<&CompareInstance> {
        self.instances.get(index)
    }

    pub fn instance_mut(&mut self, index: usize) -> Option<&mut CompareInstance> {
        self.instances.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Offer `event` to every instance and apply the resulting actions.
    pub fn handle_dom_event(&mut self, doc: &mut Document, event: &DomEvent) -> Vec<InstanceEvent> {
        let mut events = Vec::new();
        for instance in &mut self.instances {
            let Some(action) = instance.route(doc, event) else {
                continue;
            };
            let index = instance.index();
            events.extend(
                instance
                    .handle_action(doc, action)
                    .into_iter()
                    .map(|event| InstanceEvent::new(index, event)),
            );
        }
        events
    }

    /// Drain the document's event queue through the controller.
    ///
    /// Events queued while handling (mirrored scrolls) are processed in the
    /// same call. Processing stops after the event budget is spent; anything
    /// left stays queued.
    pub fn pump(&mut self, doc: &mut Document) -> Vec<InstanceEvent> {
        let mut events = Vec::new();
        let mut processed = 0;
        while let Some(event) = doc.pop_event() {
            events.extend(self.handle_dom_event(doc, &event));
            processed += 1;
            if processed >= self.event_budget {
                if doc.pending_events() > 0 {
                    log::warn!(
                        "Photo compare pump stopped after {} events, {} still queued",
                        processed,
                        doc.pending_events()
                    );
                }
                break;
            }
        }
        events
    }
}
