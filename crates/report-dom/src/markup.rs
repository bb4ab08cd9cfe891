//! Load a [`Document`] from page markup.
//!
//! Markup is read with `quick-xml` in a forgiving mode: void elements such as
//! `<img>` and `<input>` may be written without a closing slash, valueless
//! attributes (`required`) are accepted, mismatched end tags close the
//! nearest open element with that name and end tags with no open element of
//! that name are dropped. Fragments are placed inside `body`;
//! explicit `<html>`/`<body>` tags map onto the document's own root and body.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::node::is_void_tag;
use crate::{Document, NodeId};

/// Errors that can occur while loading markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Malformed markup at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    #[error("Invalid attribute on <{tag}>: {message}")]
    Attribute { tag: String, message: String },
}

/// Parse `markup` into a new document.
///
/// # Example
/// ```ignore
/// let doc = parse_markup(r#"<div class="photo-compare-container">...</div>"#)?;
/// ```
pub fn parse_markup(markup: &str) -> Result<Document, MarkupError> {
    let mut doc = Document::new();
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    // The bottom entry is never popped
    let mut open: Vec<NodeId> = vec![doc.body()];

    loop {
        let event = reader.read_event().map_err(|e| MarkupError::Syntax {
            position: reader.error_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(ref start) => {
                let node = open_element(&mut doc, &open, start)?;
                if !is_void_tag(doc.tag(node)) {
                    open.push(node);
                }
            }
            Event::Empty(ref start) => {
                open_element(&mut doc, &open, start)?;
            }
            Event::End(ref end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                if let Some(depth) = open.iter().rposition(|&n| doc.tag(n) == name) {
                    let node = open[depth];
                    if name == "textarea" {
                        // A textarea's content is its initial value
                        let initial = doc.text(node).to_string();
                        doc.set_value(node, &initial);
                    }
                    open.truncate(depth.max(1));
                }
            }
            Event::Text(ref text) => {
                let content = match text.unescape() {
                    Ok(content) => content.into_owned(),
                    // Unknown entities (e.g. `&nbsp;`) are kept verbatim
                    Err(_) => String::from_utf8_lossy(text).into_owned(),
                };
                if !content.trim().is_empty() {
                    let current = *open.last().unwrap_or(&doc.body());
                    doc.push_text(current, &content);
                }
            }
            Event::CData(ref data) => {
                let current = *open.last().unwrap_or(&doc.body());
                doc.push_text(current, &String::from_utf8_lossy(data));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if open.len() > 1 {
        log::debug!("Markup ended with {} unclosed element(s)", open.len() - 1);
    }
    Ok(doc)
}

/// Create (or reuse, for `html`/`body`) the element for a start tag.
fn open_element(
    doc: &mut Document,
    open: &[NodeId],
    start: &BytesStart<'_>,
) -> Result<NodeId, MarkupError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase();
    let parent = *open.last().unwrap_or(&doc.body());

    let node = match tag.as_str() {
        "html" => doc.root(),
        "body" => doc.body(),
        "head" if parent == doc.root() => {
            let head = doc.create_element("head");
            let (root, body) = (doc.root(), doc.body());
            doc.insert_before(root, head, body);
            head
        }
        _ => {
            let node = doc.create_element(&tag);
            doc.append_child(parent, node);
            node
        }
    };

    for attribute in start.html_attributes() {
        let attribute = attribute.map_err(|e| MarkupError::Attribute {
            tag: tag.clone(),
            message: e.to_string(),
        })?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).to_ascii_lowercase();
        let value = attribute
            .unescape_value()
            .map_err(|e| MarkupError::Attribute {
                tag: tag.clone(),
                message: e.to_string(),
            })?;
        doc.set_attribute(node, &name, &value);
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fragment_goes_into_body() {
        let doc = parse_markup(r#"<div class="a"></div><p>x</p>"#).unwrap();
        let body_children: Vec<&str> = doc
            .children(doc.body())
            .iter()
            .map(|&n| doc.tag(n))
            .collect();
        assert_eq!(body_children, vec!["div", "p"]);
    }

    #[test]
    fn test_full_page_reuses_root_and_body() {
        let doc = parse_markup(
            r#"<html lang="ja"><head><title>t</title></head><body class="home"><main/></body></html>"#,
        )
        .unwrap();
        assert_eq!(doc.attribute(doc.root(), "lang"), Some("ja"));
        assert!(doc.has_class(doc.body(), "home"));
        assert_eq!(doc.tag(doc.children(doc.root())[0]), "head");
        assert_eq!(doc.tag(doc.children(doc.body())[0]), "main");
    }

    #[test]
    fn test_void_elements_without_slash() {
        let doc = parse_markup(
            r#"<form><input name="a" required><img src="x.jpg"><span>after</span></form>"#,
        )
        .unwrap();
        let form = doc.query_selector(doc.root(), "form").unwrap().unwrap();
        let tags: Vec<&str> = doc.children(form).iter().map(|&n| doc.tag(n)).collect();
        assert_eq!(tags, vec!["input", "img", "span"]);

        let input = doc.children(form)[0];
        assert!(doc.has_attribute(input, "required"));
    }

    #[test]
    fn test_value_and_style_attributes() {
        let doc = parse_markup(
            r#"<input type="range" value="50"/><div style="width: 50%"></div>"#,
        )
        .unwrap();
        let input = doc.query_selector(doc.root(), "input").unwrap().unwrap();
        let div = doc.query_selector(doc.root(), "div").unwrap().unwrap();
        assert_eq!(doc.value(input), "50");
        assert_eq!(doc.style(div, "width"), Some("50%"));
    }

    #[test]
    fn test_entities_and_unknown_entities() {
        let doc = parse_markup("<p>a &amp; b</p><span>x&nbsp;y</span>").unwrap();
        let p = doc.query_selector(doc.root(), "p").unwrap().unwrap();
        let span = doc.query_selector(doc.root(), "span").unwrap().unwrap();
        assert_eq!(doc.text(p), "a & b");
        assert_eq!(doc.text(span), "x&nbsp;y");
    }

    #[test]
    fn test_textarea_text_is_initial_value() {
        let doc = parse_markup("<textarea name=\"memo\">設置済み</textarea>").unwrap();
        let textarea = doc.query_selector(doc.root(), "textarea").unwrap().unwrap();
        assert_eq!(doc.value(textarea), "設置済み");
    }

    #[test]
    fn test_unclosed_tag_is_error() {
        assert!(matches!(
            parse_markup("<div><p"),
            Err(MarkupError::Syntax { .. })
        ));
    }

    #[test]
    fn test_stray_end_tag_ignored() {
        let doc = parse_markup("<div></span><p/></div>").unwrap();
        let div = doc.query_selector(doc.root(), "div").unwrap().unwrap();
        assert_eq!(doc.children(div).len(), 1);
    }

    #[test]
    fn test_stray_end_tags_keep_structure() {
        let doc = parse_markup("</p><section><div></span></b><p>x</p></div><i/></section>").unwrap();
        let section = doc.query_selector(doc.root(), "section").unwrap().unwrap();
        let tags: Vec<&str> = doc.children(section).iter().map(|&n| doc.tag(n)).collect();
        assert_eq!(tags, vec!["div", "i"]);
        let p = doc.query_selector(doc.root(), "section div p").unwrap().unwrap();
        assert_eq!(doc.text(p), "x");
    }
}
