//! # report-dom
//!
//! A small in-memory model of the host view the report pages run in: an
//! element tree with classes, attributes, inline styles, text, form values,
//! image load state and scroll offsets, plus a FIFO event queue.
//!
//! ## Design Principles
//!
//! The widgets built on top of this crate never talk to a real browser. They
//! read and write element state through [`Document`] and react to
//! [`DomEvent`]s popped from its queue. This enables:
//!
//! - Deterministic tests of event-driven behavior
//! - Explicit ordering of asynchronous signals (image loads, echo scrolls)
//! - Reuse of the same widget logic with any host that can mirror the model
//!
//! ## Usage
//!
//! ```rust,ignore
//! use report_dom::{parse_markup, Selector};
//!
//! let mut doc = parse_markup(r#"<div class="box"><img src="a.jpg"/></div>"#)?;
//! let img = doc.query_selector(doc.root(), ".box img")?.unwrap();
//! doc.finish_image_load(img);
//! while let Some(event) = doc.pop_event() {
//!     // route the event to whatever is listening
//! }
//! ```

pub mod document;
pub mod event;
pub mod fullscreen;
pub mod markup;
pub mod node;
pub mod selector;

pub use document::Document;
pub use event::{DomEvent, EventKind};
pub use fullscreen::FullscreenApi;
pub use markup::{parse_markup, MarkupError};
pub use node::{Element, NodeId, ScrollOffset, SelectedFile};
pub use selector::{Selector, SelectorError};
