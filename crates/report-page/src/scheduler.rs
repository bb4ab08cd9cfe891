//! Virtual clock for `setTimeout`-style work.
//!
//! Nothing runs on wall-clock time. [`crate::Page::advance`] moves the clock
//! forward and runs every task that became due, in due-time order; tasks due
//! at the same time run in the order they were scheduled.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use report_dom::{NodeId, SelectedFile};

use crate::PageContext;

/// Deferred work the page scripts schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Add a class (entrance animations).
    AddClass { node: NodeId, class: &'static str },
    /// Set one inline style property.
    SetStyle {
        node: NodeId,
        property: &'static str,
        value: &'static str,
    },
    /// Close a flash message.
    CloseAlert(NodeId),
    /// Fade the page loader out, then hide it.
    FadePageLoader(NodeId),
    /// Finish reading an image file and show it in the preview element.
    ShowPreview { preview: NodeId, file: SelectedFile },
}

impl Task {
    pub(crate) fn run(self, ctx: &mut PageContext<'_>) {
        match self {
            Task::AddClass { node, class } => ctx.doc.add_class(node, class),
            Task::SetStyle {
                node,
                property,
                value,
            } => ctx.doc.set_style(node, property, value),
            Task::CloseAlert(node) => {
                if !ctx.doc.is_connected(node) {
                    return;
                }
                ctx.doc.remove_class(node, "show");
                ctx.doc.detach(node);
                log::debug!("Closed alert {:?}", node);
            }
            Task::FadePageLoader(node) => {
                ctx.doc.add_class(node, "loaded");
                ctx.scheduler.schedule(
                    ctx.config.page_loader_hide_ms,
                    Task::SetStyle {
                        node,
                        property: "display",
                        value: "none",
                    },
                );
            }
            Task::ShowPreview { preview, file } => {
                let url = data_url(&file);
                ctx.doc.set_attribute(preview, "src", &url);
                ctx.doc.set_style(preview, "display", "block");
            }
        }
    }
}

/// Encode a file the way `FileReader.readAsDataURL` does.
pub fn data_url(file: &SelectedFile) -> String {
    let mime = if file.mime.is_empty() {
        "application/octet-stream"
    } else {
        file.mime.as_str()
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(&file.bytes))
}

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Scheduled {
    due: u64,
    id: TaskId,
    task: Task,
}

/// Pending tasks keyed by due time on a virtual millisecond clock.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds since the page was created.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Run `task` after `delay_ms`.
    pub fn schedule(&mut self, delay_ms: u64, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            due: self.now.saturating_add(delay_ms),
            id,
            task,
        });
        id
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Remove the earliest task due at or before `deadline` and move the
    /// clock to its due time.
    pub(crate) fn pop_due(&mut self, deadline: u64) -> Option<Task> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due <= deadline)
            .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.id))
            .map(|(index, _)| index)?;
        let scheduled = self.pending.remove(index);
        self.now = self.now.max(scheduled.due);
        Some(scheduled.task)
    }

    /// Move the clock to `time` without running anything.
    pub(crate) fn set_now(&mut self, time: u64) {
        self.now = self.now.max(time);
    }
}
