//! Horizontal scrolling for wide tables.

use crate::{Behavior, PageContext};

/// Wraps each `table` in a `div.table-responsive` unless it opts out with
/// `no-responsive` or is already wrapped.
#[derive(Debug, Default)]
pub struct ResponsiveTables;

impl ResponsiveTables {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for ResponsiveTables {
    fn name(&self) -> &'static str {
        "responsive-tables"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        let mut wrapped = 0;
        for table in ctx.select_all("table:not(.no-responsive)") {
            let Some(parent) = ctx.doc.parent(table) else {
                continue;
            };
            if ctx.doc.has_class(parent, "table-responsive") {
                continue;
            }
            let wrapper = ctx.doc.create_element("div");
            ctx.doc.add_class(wrapper, "table-responsive");
            ctx.doc.insert_before(parent, wrapper, table);
            ctx.doc.append_child(wrapper, table);
            wrapped += 1;
        }
        log::debug!("Wrapped {} table(s)", wrapped);
    }
}
