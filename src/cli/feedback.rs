//! Terminal implementations of the core feedback collaborators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::feedback::{Feedback, Navigator, Notification, Notifier};
use crate::domain::FocusTarget;

use super::output;

/// Prints announcements and focus moves as a textual live region.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalFeedback;

impl Feedback for TerminalFeedback {
    fn announce(&self, message: Option<&str>) {
        if let Some(message) = message {
            output::status(message);
        }
    }

    fn focus(&self, target: FocusTarget) {
        output::info(format!("Focus moved to {}", target.label()));
    }
}

/// Renders toast notifications as success lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        output::success(format!(
            "{}: {}",
            notification.title, notification.description
        ));
    }
}

/// Records that navigation happened so the session loop can stop.
#[derive(Debug, Clone, Default)]
pub struct CliNavigator {
    navigated: Arc<AtomicBool>,
}

impl CliNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared flag flipped on the first `go_to` call.
    pub fn navigated_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.navigated)
    }
}

impl Navigator for CliNavigator {
    fn go_to(&self, path: &str) {
        self.navigated.store(true, Ordering::SeqCst);
        output::info(format!("Continuing to {}", path));
    }
}
