//! # report-page
//!
//! Page runtime for the cleaning report screens: the small scripts every
//! page loads (tooltips, flash messages, form validation, the mobile navbar,
//! iOS dropdown handling), the dashboard extras and the photo comparison
//! widgets, all driven by one event loop over a [`report_dom::Document`].
//!
//! ## Design Principles
//!
//! Each script is a [`Behavior`]: it installs itself once the page is ready
//! and then sees every event in order. Timers run on a virtual clock
//! ([`Scheduler`]) and modal dialogs go through the [`DialogHost`] trait,
//! so a whole page session can be replayed deterministically.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use report_dom::parse_markup;
//! use report_page::{Environment, Page};
//!
//! let mut page = Page::builder(parse_markup(dashboard_html)?)
//!     .environment(Environment::iphone())
//!     .with_main_scripts()
//!     .with_dashboard_scripts()
//!     .build();
//! page.ready();
//! page.advance(5_000); // flash messages close
//! ```

pub mod behavior;
pub mod behaviors;
pub mod dialog;
pub mod environment;
pub mod maps;
pub mod page;
pub mod scheduler;

pub use behavior::{Behavior, PageContext};
pub use dialog::{DialogHost, OpenedWindow, ScriptedDialogs};
pub use environment::Environment;
pub use maps::{map_search_url, show_map_for_address, AddressError};
pub use page::{Page, PageBuilder};
pub use scheduler::{data_url, Scheduler, Task, TaskId};
