//! Events delivered through the document queue.

use crate::NodeId;

/// What happened to the event target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Pointer activation (mouse click or synthetic `click()`).
    Click,
    /// The target's scroll offset changed.
    Scroll,
    /// A form control's value changed while being edited (range sliders).
    Input,
    /// A form control's value was committed (file inputs).
    Change,
    /// A form is being submitted.
    Submit,
    /// An image finished loading.
    Load,
    /// A finger touched the target.
    TouchStart { screen_x: i32 },
    /// A finger left the screen over the target.
    TouchEnd { screen_x: i32 },
    /// The pointer entered the target.
    MouseEnter,
    /// The pointer left the target.
    MouseLeave,
    /// The viewport was resized. Targets the document root.
    Resize,
}

impl EventKind {
    /// Name of the event as the host reports it.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Scroll => "scroll",
            EventKind::Input => "input",
            EventKind::Change => "change",
            EventKind::Submit => "submit",
            EventKind::Load => "load",
            EventKind::TouchStart { .. } => "touchstart",
            EventKind::TouchEnd { .. } => "touchend",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::Resize => "resize",
        }
    }

    /// Horizontal screen position for touch events.
    pub fn screen_x(&self) -> Option<i32> {
        match self {
            EventKind::TouchStart { screen_x } | EventKind::TouchEnd { screen_x } => {
                Some(*screen_x)
            }
            _ => None,
        }
    }
}

/// An event with its propagation flags.
///
/// Handlers that want to cancel the host's default action call
/// [`DomEvent::prevent_default`]; handlers registered further up the tree
/// check [`DomEvent::is_propagation_stopped`] before acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub target: NodeId,
    pub kind: EventKind,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    pub fn new(target: NodeId, kind: EventKind) -> Self {
        Self {
            target,
            kind,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(target, EventKind::Click)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
