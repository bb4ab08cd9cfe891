//! The document arena, element operations and the event queue.

use std::collections::VecDeque;

use crate::node::{is_void_tag, Element};
use crate::{DomEvent, EventKind, FullscreenApi, NodeId, ScrollOffset, SelectedFile};
use crate::{Selector, SelectorError};

/// An element tree rooted at `html`, with a `body`, plus the host state
/// scripts observe (event queue, fullscreen support).
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    body: NodeId,
    events: VecDeque<DomEvent>,
    fullscreen_support: Vec<FullscreenApi>,
    fullscreen: Option<(NodeId, FullscreenApi)>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty `<html><body></body></html>` document.
    ///
    /// The host supports the standard fullscreen API only; use
    /// [`Document::set_fullscreen_support`] to model other hosts.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Element::new("html")],
            root: NodeId(0),
            body: NodeId(0),
            events: VecDeque::new(),
            fullscreen_support: vec![FullscreenApi::Standard],
            fullscreen: None,
        };
        let body = doc.create_element("body");
        doc.append_child(doc.root, body);
        doc.body = body;
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    /// Number of elements ever created, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Tree structure ===

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.element(node).children
    }

    pub fn tag(&self, node: NodeId) -> &str {
        self.element(node).tag()
    }

    /// Append `child` as the last child of `parent`, moving it if attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.is_inclusive_ancestor(child, parent) {
            log::warn!("Refusing to append {:?} inside its own subtree", child);
            return;
        }
        self.detach(child);
        self.element_mut(parent).children.push(child);
        self.element_mut(child).parent = Some(parent);
    }

    /// Insert `child` into `parent` right before `reference`.
    ///
    /// Falls back to appending when `reference` is not a child of `parent`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        if self.is_inclusive_ancestor(child, parent) {
            log::warn!("Refusing to insert {:?} inside its own subtree", child);
            return;
        }
        self.detach(child);
        let siblings = &mut self.element_mut(parent).children;
        match siblings.iter().position(|&c| c == reference) {
            Some(index) => siblings.insert(index, child),
            None => siblings.push(child),
        }
        self.element_mut(child).parent = Some(parent);
    }

    /// Remove `node` (and its subtree) from the tree. The element stays
    /// addressable but no longer matches document queries.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.element_mut(node).parent.take() {
            self.element_mut(parent).children.retain(|&c| c != node);
        }
    }

    /// Whether `node` is reachable from the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.is_inclusive_ancestor(self.root, node)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Descendants of `scope` in document (pre-)order, excluding `scope`.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    // === Queries ===

    pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        selector.matches(self, node)
    }

    /// All descendants of `scope` matching `selector`, in document order.
    pub fn select_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&node| selector.matches(self, node))
            .collect()
    }

    /// First descendant of `scope` matching `selector`.
    pub fn select_first(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&node| selector.matches(self, node))
    }

    pub fn query_selector(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Option<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.select_first(scope, &selector))
    }

    pub fn query_selector_all(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.select_all(scope, &selector))
    }

    /// Nearest inclusive ancestor of `node` matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if selector.matches(self, n) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    // === Classes ===

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).has_class(class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.element_mut(node).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.element_mut(node).classes.retain(|c| c != class);
    }

    /// Flip `class`, returning whether it is now present.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    // === Attributes ===

    /// Plain attribute lookup; `class` and `style` live in their own stores.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).attribute(name)
    }

    /// Attribute value treated like a script would: empty counts as absent.
    pub fn non_empty_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attribute(node, name).filter(|value| !value.is_empty())
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Set an attribute with the host's side effects: `class` and `style`
    /// replace the structured stores, `value` resets the control value and a
    /// new image `src` starts a fresh load.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        let element = self.element_mut(node);
        match name.as_str() {
            "class" => element.set_class_list(value),
            "style" => element.set_style_text(value),
            _ => {
                element.set_attribute(&name, value);
                if name == "value" {
                    element.value = value.to_string();
                }
                if name == "src" && element.tag == "img" {
                    element.image_complete = value.is_empty();
                }
            }
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> bool {
        self.element_mut(node).remove_attribute(name)
    }

    // === Inline style ===

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).style(property)
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.element_mut(node).set_style(property, value);
    }

    // === Text and form state ===

    /// Text placed directly inside `node`.
    pub fn text(&self, node: NodeId) -> &str {
        self.element(node).text()
    }

    /// Concatenated text of `node` and all its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = self.text(node).to_string();
        for child in self.descendants(node) {
            out.push_str(self.text(child));
        }
        out
    }

    /// Replace all content of `node` with `text`, like assigning
    /// `textContent`.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        let children = std::mem::take(&mut self.element_mut(node).children);
        for child in children {
            self.element_mut(child).parent = None;
        }
        self.element_mut(node).text = text.to_string();
    }

    pub(crate) fn push_text(&mut self, node: NodeId, text: &str) {
        self.element_mut(node).text.push_str(text);
    }

    pub fn value(&self, node: NodeId) -> &str {
        self.element(node).value()
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.element_mut(node).value = value.to_string();
    }

    pub fn files(&self, node: NodeId) -> &[SelectedFile] {
        self.element(node).files()
    }

    // === Images ===

    pub fn is_image_complete(&self, node: NodeId) -> bool {
        self.element(node).image_complete
    }

    /// Set the completion flag without emitting a `load` event, e.g. for
    /// images served from cache before any script attached.
    pub fn set_image_complete(&mut self, node: NodeId, complete: bool) {
        self.element_mut(node).image_complete = complete;
    }

    /// Complete an image load and queue its `load` event.
    pub fn finish_image_load(&mut self, node: NodeId) {
        self.element_mut(node).image_complete = true;
        self.queue_event(DomEvent::new(node, EventKind::Load));
    }

    // === Scrolling ===

    pub fn scroll(&self, node: NodeId) -> ScrollOffset {
        self.element(node).scroll()
    }

    /// Move the scroll position. A `scroll` event is queued only when the
    /// position actually changes, so mirrored writes settle.
    pub fn set_scroll(&mut self, node: NodeId, offset: ScrollOffset) {
        let offset = offset.clamped();
        if self.scroll(node) == offset {
            return;
        }
        self.element_mut(node).scroll = offset;
        self.queue_event(DomEvent::new(node, EventKind::Scroll));
    }

    // === Event queue ===

    pub fn queue_event(&mut self, event: DomEvent) {
        self.events.push_back(event);
    }

    pub fn pop_event(&mut self) -> Option<DomEvent> {
        self.events.pop_front()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Queue a click on `node`.
    pub fn click(&mut self, node: NodeId) {
        self.queue_event(DomEvent::click(node));
    }

    /// Change a control's value and queue an `input` event.
    pub fn input(&mut self, node: NodeId, value: &str) {
        self.set_value(node, value);
        self.queue_event(DomEvent::new(node, EventKind::Input));
    }

    /// Replace the files of a file input and queue a `change` event.
    pub fn select_files(&mut self, node: NodeId, files: Vec<SelectedFile>) {
        self.element_mut(node).files = files;
        self.queue_event(DomEvent::new(node, EventKind::Change));
    }

    // === Fullscreen ===

    pub fn set_fullscreen_support(&mut self, apis: &[FullscreenApi]) {
        self.fullscreen_support = apis.to_vec();
    }

    pub fn supports_fullscreen(&self, api: FullscreenApi) -> bool {
        self.fullscreen_support.contains(&api)
    }

    /// Present `node` fullscreen through `api`. Returns false when the host
    /// does not offer that variant.
    pub fn request_fullscreen(&mut self, node: NodeId, api: FullscreenApi) -> bool {
        if !self.supports_fullscreen(api) {
            return false;
        }
        self.fullscreen = Some((node, api));
        true
    }

    pub fn fullscreen_element(&self) -> Option<NodeId> {
        self.fullscreen.map(|(node, _)| node)
    }

    pub fn fullscreen_api(&self) -> Option<FullscreenApi> {
        self.fullscreen.map(|(_, api)| api)
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = None;
    }

    // === Serialization ===

    /// Serialize `node` and its subtree.
    ///
    /// Attributes are written as `class`, then plain attributes in insertion
    /// order, then `style`. Text precedes child elements.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let element = self.element(node);
        out.push('<');
        out.push_str(element.tag());
        if !element.classes().is_empty() {
            push_attribute(out, "class", &element.classes().join(" "));
        }
        for (name, value) in element.attributes() {
            push_attribute(out, name, value);
        }
        let style = element.style_text();
        if !style.is_empty() {
            push_attribute(out, "style", &style);
        }

        if is_void_tag(element.tag()) && element.children().is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        out.push_str(&escape(element.text(), false));
        for &child in element.children() {
            self.write_html(child, out);
        }
        out.push_str("</");
        out.push_str(element.tag());
        out.push('>');
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value, true));
    out.push('"');
}

fn escape(text: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
