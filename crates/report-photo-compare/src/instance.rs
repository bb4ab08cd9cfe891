//! One comparison container and its state.

use report_config::ZoomConfig;
use report_dom::{Document, DomEvent, EventKind, FullscreenApi, NodeId, ScrollOffset};

use crate::state::{PreloadGate, ThumbnailData, ZoomState};
use crate::{
    CompareAction, CompareCapabilities, CompareEvent, CompareParts, CompiledSelectors, PaneSide,
};

/// A comparison container with its two panes, optional parts and state.
#[derive(Debug, Clone)]
pub struct CompareInstance {
    index: usize,
    container: NodeId,
    before_pane: NodeId,
    after_pane: NodeId,
    before_image: NodeId,
    after_image: NodeId,
    parts: CompareParts,
    capabilities: CompareCapabilities,
    zoom: ZoomState,
    preload: PreloadGate,
    active_thumbnail: Option<usize>,
}

impl CompareInstance {
    /// Attach to `container`.
    ///
    /// Returns `None` when either pane or either pane image is missing. If
    /// both images are already complete the loader is hidden right away.
    pub fn attach(
        doc: &mut Document,
        index: usize,
        container: NodeId,
        selectors: &CompiledSelectors,
        zoom: ZoomConfig,
    ) -> Option<Self> {
        let before_pane = doc.select_first(container, &selectors.before_pane)?;
        let after_pane = doc.select_first(container, &selectors.after_pane)?;
        let before_image = doc.select_first(before_pane, &selectors.image)?;
        let after_image = doc.select_first(after_pane, &selectors.image)?;

        let parts = CompareParts::discover(doc, container, selectors);
        let capabilities = parts.capabilities();
        let active_thumbnail = parts
            .thumbnails
            .iter()
            .position(|&thumb| doc.has_class(thumb, "active"));

        let mut instance = Self {
            index,
            container,
            before_pane,
            after_pane,
            before_image,
            after_image,
            preload: PreloadGate::new(
                doc.is_image_complete(before_image),
                doc.is_image_complete(after_image),
            ),
            parts,
            capabilities,
            zoom: ZoomState::new(zoom),
            active_thumbnail,
        };

        if instance.preload.check() {
            instance.show_loaded(doc);
        }

        log::debug!(
            "Photo compare #{} attached with {:?}",
            index,
            instance.capabilities
        );
        Some(instance)
    }

    // === Accessors ===

    /// Position of this instance among the page's comparisons.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn pane(&self, side: PaneSide) -> NodeId {
        match side {
            PaneSide::Before => self.before_pane,
            PaneSide::After => self.after_pane,
        }
    }

    pub fn image(&self, side: PaneSide) -> NodeId {
        match side {
            PaneSide::Before => self.before_image,
            PaneSide::After => self.after_image,
        }
    }

    pub fn parts(&self) -> &CompareParts {
        &self.parts
    }

    pub fn capabilities(&self) -> CompareCapabilities {
        self.capabilities
    }

    pub fn zoom_level(&self) -> u16 {
        self.zoom.level()
    }

    /// Whether both photos have loaded and the loader was hidden.
    pub fn is_loaded(&self) -> bool {
        self.preload.is_open()
    }

    pub fn active_thumbnail(&self) -> Option<usize> {
        self.active_thumbnail
    }

    // === Routing ===

    /// Map a DOM event to the action this instance takes for it, if any.
    ///
    /// Scroll, load and input events only count on their exact target.
    /// Clicks bubble: a click anywhere inside a button or thumbnail
    /// activates it.
    pub fn route(&self, doc: &Document, event: &DomEvent) -> Option<CompareAction> {
        let target = event.target;
        match event.kind {
            EventKind::Scroll => self.side_of(target, self.before_pane, self.after_pane)
                .map(CompareAction::SyncScroll),
            EventKind::Load => self.side_of(target, self.before_image, self.after_image)
                .map(CompareAction::ImageLoaded),
            EventKind::Input => self
                .parts
                .slider
                .filter(|slider| slider.input == target)
                .map(|_| CompareAction::SliderInput),
            EventKind::Click => self.route_click(doc, target),
            _ => None,
        }
    }

    fn side_of(&self, target: NodeId, before: NodeId, after: NodeId) -> Option<PaneSide> {
        if target == before {
            Some(PaneSide::Before)
        } else if target == after {
            Some(PaneSide::After)
        } else {
            None
        }
    }

    fn route_click(&self, doc: &Document, target: NodeId) -> Option<CompareAction> {
        let mut current = Some(target);
        while let Some(node) = current {
            if node == self.container {
                return None;
            }
            let hit = |part: Option<NodeId>| part == Some(node);
            if hit(self.parts.zoom_in) {
                return Some(CompareAction::ZoomIn);
            }
            if hit(self.parts.zoom_out) {
                return Some(CompareAction::ZoomOut);
            }
            if hit(self.parts.zoom_reset) {
                return Some(CompareAction::ResetZoom);
            }
            if hit(self.parts.fullscreen) {
                return Some(CompareAction::RequestFullscreen);
            }
            if let Some(index) = self.parts.thumbnails.iter().position(|&t| t == node) {
                return Some(CompareAction::SelectThumbnail(index));
            }
            current = doc.parent(node);
        }
        None
    }

    // === Actions ===

    /// Apply `action` to the document and report what changed.
    pub fn handle_action(&mut self, doc: &mut Document, action: CompareAction) -> Vec<CompareEvent> {
        let mut events = Vec::new();
        if let Some(event) = self.apply(doc, action) {
            events.push(event);
        }
        events
    }

    fn apply(&mut self, doc: &mut Document, action: CompareAction) -> Option<CompareEvent> {
        match action {
            CompareAction::SyncScroll(from) => self.sync_scroll(doc, from),
            CompareAction::ImageLoaded(side) => {
                if self.preload.mark(side) {
                    self.show_loaded(doc);
                    Some(CompareEvent::Loaded)
                } else {
                    None
                }
            }
            CompareAction::ZoomIn => {
                self.require(CompareCapabilities::ZOOM_IN)?;
                self.zoom.zoom_in().then(|| self.apply_zoom(doc))
            }
            CompareAction::ZoomOut => {
                self.require(CompareCapabilities::ZOOM_OUT)?;
                self.zoom.zoom_out().then(|| self.apply_zoom(doc))
            }
            CompareAction::ResetZoom => {
                self.require(CompareCapabilities::ZOOM_RESET)?;
                self.zoom.reset();
                let event = self.apply_zoom(doc);
                doc.set_scroll(self.before_pane, ScrollOffset::ORIGIN);
                doc.set_scroll(self.after_pane, ScrollOffset::ORIGIN);
                Some(event)
            }
            CompareAction::SliderInput => self.apply_slider(doc),
            CompareAction::RequestFullscreen => {
                self.require(CompareCapabilities::FULLSCREEN)?;
                self.request_fullscreen(doc)
            }
            CompareAction::SelectThumbnail(index) => self.select_thumbnail(doc, index),
        }
    }

    fn require(&self, capability: CompareCapabilities) -> Option<()> {
        if self.capabilities.contains(capability) {
            Some(())
        } else {
            log::debug!(
                "Photo compare #{} has no {:?}, ignoring",
                self.index,
                capability
            );
            None
        }
    }

    fn sync_scroll(&self, doc: &mut Document, from: PaneSide) -> Option<CompareEvent> {
        let offset = doc.scroll(self.pane(from));
        let target = self.pane(from.other());
        if doc.scroll(target) == offset {
            return None;
        }
        doc.set_scroll(target, offset);
        Some(CompareEvent::ScrollSynced { from, offset })
    }

    fn apply_zoom(&self, doc: &mut Document) -> CompareEvent {
        let width = self.zoom.css_width();
        doc.set_style(self.before_image, "width", &width);
        doc.set_style(self.after_image, "width", &width);
        if let Some(indicator) = self.parts.zoom_level {
            doc.set_text(indicator, &width);
        }
        CompareEvent::ZoomChanged(self.zoom.level())
    }

    fn show_loaded(&self, doc: &mut Document) {
        if let Some(loader) = self.parts.loader {
            doc.set_style(loader, "display", "none");
        }
        doc.add_class(self.container, "loaded");
        log::debug!("Photo compare #{} loaded", self.index);
    }

    fn apply_slider(&self, doc: &mut Document) -> Option<CompareEvent> {
        let slider = self.parts.slider?;
        let raw = doc.value(slider.input);
        let Some(percent) = parse_percent(raw) else {
            log::debug!("Ignoring non-numeric slider value {:?}", raw);
            return None;
        };
        doc.set_style(slider.before, "width", &format!("{}%", percent));
        Some(CompareEvent::RevealChanged(percent))
    }

    fn request_fullscreen(&self, doc: &mut Document) -> Option<CompareEvent> {
        let api = FullscreenApi::PRIORITY
            .into_iter()
            .find(|&api| doc.request_fullscreen(self.container, api));
        if api.is_none() {
            log::debug!("Host offers no fullscreen API");
        }
        api.map(CompareEvent::FullscreenRequested)
    }

    fn select_thumbnail(&mut self, doc: &mut Document, index: usize) -> Option<CompareEvent> {
        let thumbnail = *self.parts.thumbnails.get(index)?;
        let data = ThumbnailData::read(doc, thumbnail);
        let Some((before, after)) = data.sources() else {
            log::debug!("Thumbnail {} lacks a photo URL, ignoring", index);
            return None;
        };

        for &thumb in &self.parts.thumbnails {
            doc.remove_class(thumb, "active");
        }
        doc.add_class(thumbnail, "active");
        self.active_thumbnail = Some(index);

        doc.set_attribute(self.before_image, "src", before);
        doc.set_attribute(self.after_image, "src", after);

        if let (Some(caption), Some(text)) = (self.parts.before_caption, &data.before_caption) {
            doc.set_text(caption, text);
        }
        if let (Some(caption), Some(text)) = (self.parts.after_caption, &data.after_caption) {
            doc.set_text(caption, text);
        }

        Some(CompareEvent::ThumbnailActivated(index))
    }
}

/// Parse a slider value into a percentage in `[0, 100]`.
fn parse_percent(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // `clamp` keeps a negative zero, which would print as "-0"
    Some(value.clamp(0.0, 100.0) + 0.0)
}
