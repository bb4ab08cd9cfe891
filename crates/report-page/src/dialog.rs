//! Browser dialogs and new windows.

use std::collections::VecDeque;

/// Modal dialogs and window opening offered by the host.
///
/// Implement this trait to connect the page scripts to a real host. The
/// page only ever calls these three entry points, so a test double can
/// record every prompt and answer confirmations from a script.
///
/// # Example
///
/// ```ignore
/// struct AlwaysConfirm;
///
/// impl DialogHost for AlwaysConfirm {
///     fn confirm(&mut self, _message: &str) -> bool {
///         true
///     }
///     fn alert(&mut self, message: &str) {
///         log::info!("alert: {}", message);
///     }
///     fn open_window(&mut self, url: &str, target: &str, _features: &str) {
///         log::info!("open {} in {}", url, target);
///     }
/// }
/// ```
pub trait DialogHost {
    /// Ask a yes/no question. Returns true when the user accepted.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message.
    fn alert(&mut self, message: &str);

    /// Open `url` in a browsing context named `target`.
    fn open_window(&mut self, url: &str, target: &str, features: &str);
}

/// A window opened through [`DialogHost::open_window`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedWindow {
    pub url: String,
    pub target: String,
    pub features: String,
}

/// Records every dialog and answers confirmations from a queue.
///
/// When the queue is empty confirmations get the default answer, which is
/// `true` unless changed with [`ScriptedDialogs::with_default_answer`].
#[derive(Debug, Clone)]
pub struct ScriptedDialogs {
    answers: VecDeque<bool>,
    default_answer: bool,
    /// Messages passed to `confirm`, in order.
    pub confirms: Vec<String>,
    /// Messages passed to `alert`, in order.
    pub alerts: Vec<String>,
    pub windows: Vec<OpenedWindow>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self {
            answers: VecDeque::new(),
            default_answer: true,
            confirms: Vec::new(),
            alerts: Vec::new(),
            windows: Vec::new(),
        }
    }

    pub fn with_default_answer(mut self, answer: bool) -> Self {
        self.default_answer = answer;
        self
    }

    /// Queue the answer for the next confirmation.
    pub fn answer_next(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }
}

impl Default for ScriptedDialogs {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogHost for ScriptedDialogs {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.answers.pop_front().unwrap_or(self.default_answer)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn open_window(&mut self, url: &str, target: &str, features: &str) {
        self.windows.push(OpenedWindow {
            url: url.to_string(),
            target: target.to_string(),
            features: features.to_string(),
        });
    }
}
