//! Element storage for the document arena.

/// Handle to an element stored in a [`crate::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the element in the document arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Scroll position of a scrollable element, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub top: i32,
    pub left: i32,
}

impl ScrollOffset {
    pub const ORIGIN: ScrollOffset = ScrollOffset { top: 0, left: 0 };

    pub fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }

    /// Negative offsets are not reachable by scrolling.
    pub(crate) fn clamped(self) -> Self {
        Self {
            top: self.top.max(0),
            left: self.left.max(0),
        }
    }
}

/// A file picked through a file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// Tags that never have children or an end tag.
pub(crate) const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// A single element of the document.
///
/// `class` and `style` are kept in structured form rather than as raw
/// attributes; [`crate::Document::attribute`] never returns them.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) style: Vec<(String, String)>,
    pub(crate) text: String,
    pub(crate) value: String,
    pub(crate) files: Vec<SelectedFile>,
    pub(crate) image_complete: bool,
    pub(crate) scroll: ScrollOffset,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: Vec::new(),
            style: Vec::new(),
            text: String::new(),
            value: String::new(),
            files: Vec::new(),
            // An image without a source has nothing left to load
            image_complete: true,
            scroll: ScrollOffset::ORIGIN,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    /// Inline style serialized as `a: b; c: d`.
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    pub(crate) fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|(key, _)| key != name);
        before != self.attributes.len()
    }

    pub(crate) fn set_class_list(&mut self, value: &str) {
        self.classes.clear();
        for class in value.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    pub(crate) fn set_style(&mut self, property: &str, value: &str) {
        match self.style.iter_mut().find(|(key, _)| key == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.style.push((property.to_string(), value.to_string())),
        }
    }

    /// Replace the whole inline style from a `style` attribute value.
    pub(crate) fn set_style_text(&mut self, text: &str) {
        self.style.clear();
        for declaration in text.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                let property = property.trim();
                let value = value.trim();
                if !property.is_empty() {
                    self.set_style(&property.to_ascii_lowercase(), value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_list_deduplicates() {
        let mut el = Element::new("div");
        el.set_class_list("card  card active");
        assert_eq!(el.classes(), &["card".to_string(), "active".to_string()]);
    }

    #[test]
    fn test_style_text_roundtrip() {
        let mut el = Element::new("div");
        el.set_style_text("width: 50%; Display:none;;");
        assert_eq!(el.style("width"), Some("50%"));
        assert_eq!(el.style("display"), Some("none"));
        assert_eq!(el.style_text(), "width: 50%; display: none");
    }

    #[test]
    fn test_scroll_offset_clamps_negative() {
        assert_eq!(ScrollOffset::new(-4, 12).clamped(), ScrollOffset::new(0, 12));
    }

    #[test]
    fn test_attribute_replace_and_remove() {
        let mut el = Element::new("a");
        el.set_attribute("href", "/a");
        el.set_attribute("href", "/b");
        assert_eq!(el.attribute("href"), Some("/b"));
        assert!(el.remove_attribute("href"));
        assert!(!el.remove_attribute("href"));
    }
}
