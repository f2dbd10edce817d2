use std::sync::{Arc, Mutex};
use std::time::Duration;

use signup_core::config::SignupConfig;
use signup_core::core::feedback::{Feedback, Navigator, Notification, Notifier};
use signup_core::core::{Command, SubmissionController, TimerId};
use signup_core::domain::{FocusTarget, FormInput};
use signup_core::gateway::SignUpRequest;
use signup_core::storage::{MemoryStore, SignupRepository};

/// Everything the feedback surface observed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    Announced(Option<String>),
    Focused(FocusTarget),
}

#[derive(Clone, Default)]
pub struct RecordingFeedback {
    events: Arc<Mutex<Vec<FeedbackEvent>>>,
}

impl RecordingFeedback {
    pub fn events(&self) -> Vec<FeedbackEvent> {
        self.events.lock().expect("feedback lock").clone()
    }

    pub fn announcements(&self) -> Vec<Option<String>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                FeedbackEvent::Announced(message) => Some(message),
                FeedbackEvent::Focused(_) => None,
            })
            .collect()
    }

    pub fn focus_moves(&self) -> Vec<FocusTarget> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                FeedbackEvent::Focused(target) => Some(target),
                FeedbackEvent::Announced(_) => None,
            })
            .collect()
    }
}

impl Feedback for RecordingFeedback {
    fn announce(&self, message: Option<&str>) {
        self.events
            .lock()
            .expect("feedback lock")
            .push(FeedbackEvent::Announced(message.map(str::to_string)));
    }

    fn focus(&self, target: FocusTarget) {
        self.events
            .lock()
            .expect("feedback lock")
            .push(FeedbackEvent::Focused(target));
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().expect("notifier lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .expect("notifier lock")
            .push(notification);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.visits
            .lock()
            .expect("navigator lock")
            .push(path.to_string());
    }
}

/// Controller wired to recording collaborators over a shared memory store.
pub struct Harness {
    pub store: MemoryStore,
    pub feedback: RecordingFeedback,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
    pub controller: SubmissionController,
}

pub fn harness() -> Harness {
    harness_with(MemoryStore::new(), SignupConfig::default())
}

pub fn harness_with(store: MemoryStore, config: SignupConfig) -> Harness {
    let feedback = RecordingFeedback::default();
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();
    let controller = SubmissionController::new(
        SignupRepository::new(Box::new(store.clone())),
        Box::new(feedback.clone()),
        Box::new(notifier.clone()),
        Box::new(navigator.clone()),
        config,
    );
    Harness {
        store,
        feedback,
        notifier,
        navigator,
        controller,
    }
}

/// Repository over the harness store, for seeding and asserting persistence.
pub fn repository(store: &MemoryStore) -> SignupRepository {
    SignupRepository::new(Box::new(store.clone()))
}

pub fn valid_input() -> FormInput {
    FormInput {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        password: "Abcdef12".into(),
        confirm_password: "Abcdef12".into(),
        agree_terms: true,
    }
}

/// All armed timers in command order.
pub fn schedules(commands: &[Command]) -> Vec<(TimerId, Duration)> {
    commands
        .iter()
        .filter_map(|command| match command {
            Command::Schedule { timer, after } => Some((*timer, *after)),
            _ => None,
        })
        .collect()
}

/// The remote call started by the commands, if any.
pub fn sign_up_request(commands: &[Command]) -> Option<SignUpRequest> {
    commands.iter().find_map(|command| match command {
        Command::CallSignUp(request) => Some(request.clone()),
        _ => None,
    })
}
