//! Collaborator traits for user-facing feedback and navigation.
//!
//! All three are boundary calls into caller-supplied implementations; the
//! controller never renders anything itself.

use crate::domain::FocusTarget;

/// Live-region surface for assistive-technology announcements and focus
/// routing. Every status-message change goes through `announce`; after an
/// error-state update exactly one `focus` call names the first actionable
/// problem.
pub trait Feedback {
    fn announce(&self, message: Option<&str>);
    fn focus(&self, target: FocusTarget);
}

/// Fire-and-forget toast payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Toast/notification collaborator; no return value is consumed.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Navigation collaborator. The signup flow only ever targets the login
/// destination, but the path comes from configuration.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// No-op feedback surface for headless embedders.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn announce(&self, _message: Option<&str>) {}
    fn focus(&self, _target: FocusTarget) {}
}

impl Notifier for SilentFeedback {
    fn notify(&self, _notification: Notification) {}
}

impl Navigator for SilentFeedback {
    fn go_to(&self, _path: &str) {}
}
