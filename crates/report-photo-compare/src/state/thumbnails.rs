//! Photo and caption data carried by a thumbnail.

use report_dom::{Document, NodeId};

/// The `data-*` attributes of a thumbnail, read at click time.
///
/// Empty attribute values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThumbnailData {
    pub before: Option<String>,
    pub after: Option<String>,
    pub before_caption: Option<String>,
    pub after_caption: Option<String>,
}

impl ThumbnailData {
    pub fn read(doc: &Document, thumbnail: NodeId) -> Self {
        let get = |name: &str| doc.non_empty_attribute(thumbnail, name).map(String::from);
        Self {
            before: get("data-before"),
            after: get("data-after"),
            before_caption: get("data-before-caption"),
            after_caption: get("data-after-caption"),
        }
    }

    /// Both photo URLs, if the thumbnail can be activated at all.
    pub fn sources(&self) -> Option<(&str, &str)> {
        Some((self.before.as_deref()?, self.after.as_deref()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use report_dom::parse_markup;

    #[test]
    fn test_read_all_attributes() {
        let doc = parse_markup(
            r#"<img data-before="b.jpg" data-after="a.jpg" data-before-caption="キッチン（前）" data-after-caption=""/>"#,
        )
        .unwrap();
        let thumb = doc.children(doc.body())[0];
        let data = ThumbnailData::read(&doc, thumb);
        assert_eq!(data.sources(), Some(("b.jpg", "a.jpg")));
        assert_eq!(data.before_caption.as_deref(), Some("キッチン（前）"));
        assert_eq!(data.after_caption, None);
    }

    #[test]
    fn test_missing_url_has_no_sources() {
        let doc = parse_markup(r#"<img data-before="b.jpg" data-after=""/>"#).unwrap();
        let thumb = doc.children(doc.body())[0];
        assert_eq!(ThumbnailData::read(&doc, thumb).sources(), None);
    }
}
