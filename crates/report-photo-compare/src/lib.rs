//! # report-photo-compare
//!
//! Controller for the before/after photo comparison widget of the cleaning
//! report pages. Each comparison container on a page becomes an independent
//! [`CompareInstance`] with synchronized pane scrolling, a shared zoom level,
//! preload gating and, when the markup provides them, a reveal slider, a
//! fullscreen button and thumbnails that swap the compared photos.
//!
//! ## Design Principles
//!
//! The controller works on a [`report_dom::Document`] and never owns it.
//! Incoming [`DomEvent`](report_dom::DomEvent)s are routed to a
//! [`CompareAction`] by the instance that owns the target, the action is
//! applied to the document and a list of [`CompareEvent`]s describes what
//! changed. This enables:
//!
//! - Testing every interaction without a browser
//! - Hosting the widget inside a larger page runtime
//! - Inspecting state transitions through the returned events
//!
//! ## Usage
//!
//! ```rust,ignore
//! use report_config::PhotoCompareConfig;
//! use report_dom::parse_markup;
//! use report_photo_compare::PhotoCompare;
//!
//! let mut doc = parse_markup(report_html)?;
//! let mut compare = PhotoCompare::initialize(&mut doc, &PhotoCompareConfig::default());
//!
//! let zoom_in = doc.query_selector(doc.root(), ".zoom-in")?.unwrap();
//! doc.click(zoom_in);
//! for event in compare.pump(&mut doc) {
//!     // InstanceEvent { instance: 0, event: CompareEvent::ZoomChanged(110) }
//! }
//! ```

pub mod action;
pub mod capabilities;
pub mod controller;
pub mod event;
pub mod instance;
pub mod selectors;
pub mod state;

pub use action::{CompareAction, PaneSide};
pub use capabilities::{CompareCapabilities, CompareParts, SliderParts};
pub use controller::{PhotoCompare, DEFAULT_EVENT_BUDGET};
pub use event::{CompareEvent, InstanceEvent};
pub use instance::CompareInstance;
pub use selectors::CompiledSelectors;
pub use state::{PreloadGate, ThumbnailData, ZoomState};
