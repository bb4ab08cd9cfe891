//! Form validation and image upload previews.

use regex::Regex;
use report_dom::{Document, DomEvent, EventKind, NodeId};

use crate::scheduler::Task;
use crate::{Behavior, PageContext};

/// Blocks submission of invalid `.needs-validation` forms and marks every
/// attempted form `was-validated`.
#[derive(Debug, Default)]
pub struct FormValidation {
    forms: Vec<NodeId>,
}

impl FormValidation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for FormValidation {
    fn name(&self) -> &'static str {
        "form-validation"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.forms = ctx.select_all(".needs-validation");
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if event.kind != EventKind::Submit || !self.forms.contains(&event.target) {
            return;
        }
        let form = event.target;
        if !form_is_valid(ctx.doc, form) {
            log::debug!("Blocked submission of invalid form {:?}", form);
            event.prevent_default();
            event.stop_propagation();
        }
        ctx.doc.add_class(form, "was-validated");
    }
}

/// Constraint validation over the form's controls, like `checkValidity()`.
pub fn form_is_valid(doc: &Document, form: NodeId) -> bool {
    doc.descendants(form)
        .into_iter()
        .filter(|&node| matches!(doc.tag(node), "input" | "select" | "textarea"))
        .all(|control| control_is_valid(doc, form, control))
}

fn control_is_valid(doc: &Document, form: NodeId, control: NodeId) -> bool {
    if doc.has_attribute(control, "disabled") {
        return true;
    }
    let kind = doc
        .attribute(control, "type")
        .unwrap_or("text")
        .to_ascii_lowercase();
    if matches!(kind.as_str(), "hidden" | "submit" | "button" | "reset" | "image") {
        return true;
    }

    let required = doc.has_attribute(control, "required");
    match kind.as_str() {
        "checkbox" => return !required || doc.has_attribute(control, "checked"),
        "radio" => return !required || radio_group_checked(doc, form, control),
        _ => {}
    }

    let value = control_value(doc, control);
    if value.is_empty() {
        return !required;
    }

    let length = value.chars().count();
    let limit = |name: &str| {
        doc.attribute(control, name)
            .and_then(|v| v.trim().parse::<usize>().ok())
    };
    if limit("minlength").is_some_and(|min| length < min) {
        return false;
    }
    if limit("maxlength").is_some_and(|max| length > max) {
        return false;
    }

    match doc.non_empty_attribute(control, "pattern") {
        // An unparseable pattern is ignored, as browsers do
        Some(pattern) => Regex::new(&format!("^(?:{})$", pattern))
            .map(|re| re.is_match(&value))
            .unwrap_or(true),
        None => true,
    }
}

/// Current value, falling back to the selected option of a `select`.
fn control_value(doc: &Document, control: NodeId) -> String {
    let value = doc.value(control);
    if !value.is_empty() || doc.tag(control) != "select" {
        return value.to_string();
    }
    let options: Vec<NodeId> = doc
        .descendants(control)
        .into_iter()
        .filter(|&n| doc.tag(n) == "option")
        .collect();
    let selected = options
        .iter()
        .copied()
        .find(|&o| doc.has_attribute(o, "selected"))
        .or_else(|| options.first().copied());
    selected
        .map(|option| match doc.attribute(option, "value") {
            Some(value) => value.to_string(),
            None => doc.text_content(option),
        })
        .unwrap_or_default()
}

fn radio_group_checked(doc: &Document, form: NodeId, radio: NodeId) -> bool {
    let name = doc.attribute(radio, "name");
    doc.descendants(form).into_iter().any(|node| {
        doc.tag(node) == "input"
            && doc.attribute(node, "type") == Some("radio")
            && doc.attribute(node, "name") == name
            && doc.has_attribute(node, "checked")
    })
}

/// Shows the picked image of an `.image-input` in the element named by its
/// `data-preview` attribute.
#[derive(Debug, Default)]
pub struct ImagePreview {
    inputs: Vec<NodeId>,
}

impl ImagePreview {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for ImagePreview {
    fn name(&self) -> &'static str {
        "image-preview"
    }

    fn install(&mut self, ctx: &mut PageContext<'_>) {
        self.inputs = ctx.select_all(".image-input");
    }

    fn handle_event(&mut self, event: &mut DomEvent, ctx: &mut PageContext<'_>) {
        if event.kind != EventKind::Change || !self.inputs.contains(&event.target) {
            return;
        }
        let input = event.target;
        let preview = ctx
            .doc
            .non_empty_attribute(input, "data-preview")
            .and_then(|id| ctx.doc.get_element_by_id(id));
        let (Some(preview), Some(file)) = (preview, ctx.doc.files(input).first().cloned()) else {
            return;
        };
        // The file is read asynchronously
        ctx.scheduler.schedule(0, Task::ShowPreview { preview, file });
    }
}
