//! Page runtime: owns the document and drives behaviors and the photo
//! comparison widgets from one event loop.

use report_config::UiConfig;
use report_dom::{Document, DomEvent, EventKind, NodeId, ScrollOffset, Selector, SelectedFile};
use report_photo_compare::{InstanceEvent, PhotoCompare, DEFAULT_EVENT_BUDGET};

use crate::behaviors::{dashboard_scripts, main_scripts};
use crate::dialog::ScriptedDialogs;
use crate::{maps, Behavior, DialogHost, Environment, PageContext, Scheduler};

/// A loaded report page.
///
/// Events raised on the document are processed one at a time in FIFO order.
/// Each event goes to the photo comparison widgets, then to every behavior
/// in installation order, then to the host's default action unless a
/// behavior prevented it.
pub struct Page<D: DialogHost = ScriptedDialogs> {
    doc: Document,
    env: Environment,
    config: UiConfig,
    scheduler: Scheduler,
    dialogs: D,
    behaviors: Vec<Box<dyn Behavior>>,
    photo_compare_enabled: bool,
    photo_compare: Option<PhotoCompare>,
    compare_events: Vec<InstanceEvent>,
    history: Vec<String>,
    submitted: Vec<NodeId>,
    ready: bool,
}

/// Chooses the environment, configuration, dialog host and script groups of
/// a [`Page`].
pub struct PageBuilder<D: DialogHost = ScriptedDialogs> {
    doc: Document,
    env: Environment,
    config: UiConfig,
    dialogs: D,
    behaviors: Vec<Box<dyn Behavior>>,
    photo_compare: bool,
}

impl Page<ScriptedDialogs> {
    /// Start building a page around `doc`. Without further choices the page
    /// runs no scripts, on a desktop browser, with default settings.
    pub fn builder(doc: Document) -> PageBuilder<ScriptedDialogs> {
        PageBuilder {
            doc,
            env: Environment::default(),
            config: UiConfig::default(),
            dialogs: ScriptedDialogs::default(),
            behaviors: Vec::new(),
            photo_compare: false,
        }
    }
}

impl<D: DialogHost> PageBuilder<D> {
    pub fn environment(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    pub fn config(mut self, config: UiConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the dialog host.
    pub fn dialogs<E: DialogHost>(self, dialogs: E) -> PageBuilder<E> {
        PageBuilder {
            doc: self.doc,
            env: self.env,
            config: self.config,
            dialogs,
            behaviors: self.behaviors,
            photo_compare: self.photo_compare,
        }
    }

    /// Scripts shared by every page.
    pub fn with_main_scripts(mut self) -> Self {
        self.behaviors.extend(main_scripts());
        self
    }

    /// Scripts of the dashboard.
    pub fn with_dashboard_scripts(mut self) -> Self {
        self.behaviors.extend(dashboard_scripts());
        self
    }

    /// Attach photo comparison widgets when the page becomes ready.
    pub fn with_photo_compare(mut self) -> Self {
        self.photo_compare = true;
        self
    }

    /// Add a custom behavior after the ones selected so far.
    pub fn behavior(mut self, behavior: Box<dyn Behavior>) -> Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn build(self) -> Page<D> {
        Page {
            doc: self.doc,
            env: self.env,
            config: self.config,
            scheduler: Scheduler::new(),
            dialogs: self.dialogs,
            behaviors: self.behaviors,
            photo_compare_enabled: self.photo_compare,
            photo_compare: None,
            compare_events: Vec::new(),
            history: Vec::new(),
            submitted: Vec::new(),
            ready: false,
        }
    }
}

impl<D: DialogHost> Page<D> {
    /// Install every behavior, then attach the photo comparison widgets, like
    /// `DOMContentLoaded` handlers do. Calling it again does nothing.
    pub fn ready(&mut self) {
        if self.ready {
            log::warn!("Page is already ready, ignoring");
            return;
        }
        self.ready = true;

        {
            let Page {
                doc,
                env,
                config,
                scheduler,
                dialogs,
                behaviors,
                history,
                ..
            } = self;
            let mut ctx = PageContext {
                doc,
                env,
                config: &config.page,
                scheduler,
                dialogs,
                history,
            };
            for behavior in behaviors.iter_mut() {
                log::debug!("Installing {}", behavior.name());
                behavior.install(&mut ctx);
            }
        }

        if self.photo_compare_enabled {
            self.photo_compare = Some(PhotoCompare::initialize(
                &mut self.doc,
                &self.config.photo_compare,
            ));
        }

        log::info!("Page ready with {} behavior(s)", self.behaviors.len());
        self.pump();
    }

    // === Host input ===

    /// Queue `event` and process everything it causes.
    pub fn dispatch(&mut self, event: DomEvent) {
        self.doc.queue_event(event);
        self.pump();
    }

    pub fn click(&mut self, node: NodeId) {
        self.dispatch(DomEvent::click(node));
    }

    pub fn touch_start(&mut self, node: NodeId, screen_x: i32) {
        self.dispatch(DomEvent::new(node, EventKind::TouchStart { screen_x }));
    }

    pub fn touch_end(&mut self, node: NodeId, screen_x: i32) {
        self.dispatch(DomEvent::new(node, EventKind::TouchEnd { screen_x }));
    }

    pub fn mouse_enter(&mut self, node: NodeId) {
        self.dispatch(DomEvent::new(node, EventKind::MouseEnter));
    }

    pub fn mouse_leave(&mut self, node: NodeId) {
        self.dispatch(DomEvent::new(node, EventKind::MouseLeave));
    }

    /// Type `value` into a control.
    pub fn input(&mut self, node: NodeId, value: &str) {
        self.doc.input(node, value);
        self.pump();
    }

    /// Submit `form` directly, as `requestSubmit()` would.
    pub fn submit(&mut self, form: NodeId) {
        self.dispatch(DomEvent::new(form, EventKind::Submit));
    }

    pub fn select_files(&mut self, input: NodeId, files: Vec<SelectedFile>) {
        self.doc.select_files(input, files);
        self.pump();
    }

    /// Complete the download of `img` and fire its `load` event.
    pub fn finish_image_load(&mut self, img: NodeId) {
        self.doc.finish_image_load(img);
        self.pump();
    }

    /// Scroll `node` to `offset` the way a user dragging it would.
    pub fn scroll(&mut self, node: NodeId, offset: ScrollOffset) {
        self.doc.set_scroll(node, offset);
        self.pump();
    }

    /// Change the viewport width and fire `resize`.
    pub fn resize(&mut self, width: u32) {
        self.env.viewport_width = width;
        let root = self.doc.root();
        self.dispatch(DomEvent::new(root, EventKind::Resize));
    }

    /// Move the virtual clock forward by `ms`, running every task that falls
    /// due on the way. Tasks scheduled by those tasks run too if they fall
    /// due within the same window.
    pub fn advance(&mut self, ms: u64) {
        let deadline = self.scheduler.now().saturating_add(ms);
        while let Some(task) = self.scheduler.pop_due(deadline) {
            {
                let Page {
                    doc,
                    env,
                    config,
                    scheduler,
                    dialogs,
                    history,
                    ..
                } = self;
                let mut ctx = PageContext {
                    doc,
                    env,
                    config: &config.page,
                    scheduler,
                    dialogs,
                    history,
                };
                task.run(&mut ctx);
            }
            self.pump();
        }
        self.scheduler.set_now(deadline);
    }

    /// Open a map search for `address`, or alert why that is not possible.
    pub fn show_map_for_address(&mut self, address: &str) {
        maps::show_map_for_address(&mut self.dialogs, address);
    }

    // === Observation ===

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// The photo comparison controller, once the page is ready.
    pub fn photo_compare(&self) -> Option<&PhotoCompare> {
        self.photo_compare.as_ref()
    }

    /// Everything the photo comparison widgets reported so far.
    pub fn compare_events(&self) -> &[InstanceEvent] {
        &self.compare_events
    }

    /// The URL the page navigated to last, if any.
    pub fn location(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Every navigation, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Forms whose submission went through, oldest first.
    pub fn submitted_forms(&self) -> &[NodeId] {
        &self.submitted
    }

    // === Event loop ===

    fn pump(&mut self) {
        let mut processed = 0;
        while let Some(mut event) = self.doc.pop_event() {
            if let Some(compare) = self.photo_compare.as_mut() {
                let events = compare.handle_dom_event(&mut self.doc, &event);
                self.compare_events.extend(events);
            }
            self.deliver(&mut event);
            self.default_action(&event);

            processed += 1;
            if processed >= DEFAULT_EVENT_BUDGET {
                if self.doc.pending_events() > 0 {
                    log::warn!(
                        "Page stopped after {} events, {} still queued",
                        processed,
                        self.doc.pending_events()
                    );
                }
                break;
            }
        }
    }

    fn deliver(&mut self, event: &mut DomEvent) {
        let Page {
            doc,
            env,
            config,
            scheduler,
            dialogs,
            behaviors,
            history,
            ..
        } = self;
        let mut ctx = PageContext {
            doc,
            env,
            config: &config.page,
            scheduler,
            dialogs,
            history,
        };
        for behavior in behaviors.iter_mut() {
            behavior.handle_event(event, &mut ctx);
        }
    }

    fn default_action(&mut self, event: &DomEvent) {
        if event.is_default_prevented() {
            return;
        }
        match event.kind {
            EventKind::Click => {
                if let Some(control) = checkable(&self.doc, event.target) {
                    toggle_checked(&mut self.doc, control);
                    return;
                }
                if let Some(link) = closest(&self.doc, event.target, "a[href]") {
                    let href = self.doc.attribute(link, "href").unwrap_or_default();
                    if !href.is_empty() && !href.starts_with('#') {
                        log::info!("Navigating to {}", href);
                        self.history.push(href.to_string());
                    }
                    return;
                }
                let form = submit_button(&self.doc, event.target)
                    .and_then(|button| closest(&self.doc, button, "form"));
                if let Some(form) = form {
                    self.doc.queue_event(DomEvent::new(form, EventKind::Submit));
                }
            }
            EventKind::Submit if self.doc.tag(event.target) == "form" => {
                log::info!("Submitted form {:?}", event.target);
                self.submitted.push(event.target);
            }
            _ => {}
        }
    }
}

fn closest(doc: &Document, node: NodeId, selector: &str) -> Option<NodeId> {
    Selector::parse(selector)
        .ok()
        .and_then(|selector| doc.closest(node, &selector))
}

/// `node` itself when it is an enabled checkbox or radio button.
fn checkable(doc: &Document, node: NodeId) -> Option<NodeId> {
    if doc.tag(node) != "input" || doc.has_attribute(node, "disabled") {
        return None;
    }
    let kind = doc.attribute(node, "type").map(str::to_ascii_lowercase);
    matches!(kind.as_deref(), Some("checkbox" | "radio")).then_some(node)
}

/// Flip a checkbox, or check a radio button and clear the rest of its group.
fn toggle_checked(doc: &mut Document, control: NodeId) {
    let is_radio = doc
        .attribute(control, "type")
        .is_some_and(|kind| kind.eq_ignore_ascii_case("radio"));
    if !is_radio {
        if !doc.remove_attribute(control, "checked") {
            doc.set_attribute(control, "checked", "");
        }
        return;
    }

    let name = doc.attribute(control, "name").map(str::to_string);
    let scope = closest(doc, control, "form").unwrap_or_else(|| doc.root());
    if name.is_some() {
        for node in doc.descendants(scope) {
            if node != control
                && doc.tag(node) == "input"
                && doc.attribute(node, "name") == name.as_deref()
                && checkable(doc, node).is_some()
            {
                doc.remove_attribute(node, "checked");
            }
        }
    }
    doc.set_attribute(control, "checked", "");
}

/// The submit button `node` sits in, if any.
fn submit_button(doc: &Document, node: NodeId) -> Option<NodeId> {
    let control = closest(doc, node, "button, input")?;
    let kind = doc.attribute(control, "type").map(str::to_ascii_lowercase);
    let submits = match doc.tag(control) {
        "button" => matches!(kind.as_deref(), None | Some("submit")),
        _ => kind.as_deref() == Some("submit"),
    };
    submits.then_some(control)
}
