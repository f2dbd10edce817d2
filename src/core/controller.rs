//! Submission state machine for the registration form.
//!
//! The controller sequences validation, the remote account-creation call,
//! local bookkeeping, feedback, and navigation. It is event-driven: the
//! public transitions return [`Command`]s for the suspension points (the
//! remote call and every delay), and the driver feeds completions back as
//! events. All other collaborator calls happen synchronously inside a
//! transition.

use tracing::{debug, error, info};

use crate::config::SignupConfig;
use crate::domain::{AccountRecord, FocusTarget, FormErrors, FormInput, UserProfile};
use crate::errors::StoreError;
use crate::gateway::{GatewayError, SignUpRequest, SignUpResponse};
use crate::storage::SignupRepository;
use crate::validation::validate;

use super::command::{Command, TimerId, TimerPurpose, Timers};
use super::feedback::{Feedback, Navigator, Notification, Notifier};

pub const STATUS_VALIDATION_FAILED: &str = "Form validation failed. Please correct the errors.";
pub const STATUS_CREATING: &str = "Creating your account, please wait...";
pub const STATUS_SUCCESS: &str = "Account created successfully. Redirecting to login page.";
pub const STATUS_FAILURE: &str = "Failed to create account. Please try again.";
pub const GENERAL_FAILURE_FALLBACK: &str = "Failed to create account. Please try again.";
pub const DUPLICATE_EMAIL: &str = "Email already in use";
pub const REQUEST_TIMED_OUT: &str = "The sign-up request timed out. Please try again.";

pub const NOTIFY_TITLE: &str = "Account created";
pub const NOTIFY_BODY: &str = "Your account has been created successfully. Please log in.";

/// Submission lifecycle phase. At most one submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
}

/// Values captured at submit time and consumed by the success bookkeeping.
#[derive(Debug, Clone)]
struct PendingSubmission {
    name: String,
    email: String,
}

enum BookkeepingFailure {
    Duplicate,
    Store(StoreError),
}

impl BookkeepingFailure {
    fn message(&self) -> String {
        match self {
            BookkeepingFailure::Duplicate => DUPLICATE_EMAIL.into(),
            BookkeepingFailure::Store(err) => err.to_string(),
        }
    }
}

/// Orchestrates one registration session.
pub struct SubmissionController {
    config: SignupConfig,
    repository: SignupRepository,
    feedback: Box<dyn Feedback>,
    notifier: Box<dyn Notifier>,
    navigator: Box<dyn Navigator>,
    profile: Option<UserProfile>,
    status: Status,
    errors: FormErrors,
    status_message: Option<String>,
    focus: Option<FocusTarget>,
    in_flight: Option<PendingSubmission>,
    timers: Timers,
    torn_down: bool,
}

impl SubmissionController {
    /// Builds a controller and loads the saved profile, if any. A malformed
    /// profile entry is logged by the repository and skipped.
    pub fn new(
        repository: SignupRepository,
        feedback: Box<dyn Feedback>,
        notifier: Box<dyn Notifier>,
        navigator: Box<dyn Navigator>,
        config: SignupConfig,
    ) -> Self {
        let profile = repository.load_profile();
        Self {
            config,
            repository,
            feedback,
            notifier,
            navigator,
            profile,
            status: Status::Idle,
            errors: FormErrors::default(),
            status_message: None,
            focus: None,
            in_flight: None,
            timers: Timers::default(),
            torn_down: false,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The input currently designated to receive focus, if any.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Fresh field values for a new session, with the name pre-filled from
    /// the saved profile when one carries a display name.
    pub fn initial_input(&self) -> FormInput {
        match &self.profile {
            Some(profile) if !profile.display_name.is_empty() => {
                FormInput::with_name(&profile.display_name)
            }
            _ => FormInput::default(),
        }
    }

    /// Validates the input and, when clean, starts the remote call.
    ///
    /// While a submission is loading, further attempts are ignored; the
    /// trigger is expected to be disabled, and this guard backs that up.
    pub fn attempt_submit(&mut self, input: &FormInput) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }
        if self.status == Status::Loading {
            debug!("submission already in flight; ignoring attempt");
            return Vec::new();
        }

        let errors = validate(input);
        if !errors.is_empty() {
            debug!(?errors, "validation rejected the form");
            self.set_errors(errors);
            return self.set_transient_status(STATUS_VALIDATION_FAILED);
        }

        self.set_errors(FormErrors::default());
        self.status = Status::Loading;
        self.in_flight = Some(PendingSubmission {
            name: input.name.clone(),
            email: input.email.clone(),
        });
        info!(email = %input.email, "starting account creation");

        let mut commands = self.set_transient_status(STATUS_CREATING);
        commands.push(Command::CallSignUp(SignUpRequest {
            email: input.email.clone(),
            name: input.name.clone(),
            password: input.password.clone(),
        }));
        if let Some(timeout) = self.config.request_timeout() {
            let timer = self.timers.arm(TimerPurpose::RequestTimeout);
            commands.push(Command::Schedule {
                timer,
                after: timeout,
            });
        }
        commands
    }

    /// Delivers the settled outcome of the remote call.
    ///
    /// Outcomes arriving while the controller is not loading (after a
    /// timeout or teardown) are stale and ignored.
    pub fn sign_up_settled(
        &mut self,
        outcome: Result<SignUpResponse, GatewayError>,
    ) -> Vec<Command> {
        if self.torn_down || self.status != Status::Loading {
            debug!("ignoring stale sign-up outcome");
            return Vec::new();
        }
        self.timers.cancel(TimerPurpose::RequestTimeout);

        match outcome {
            Ok(response) if response.is_failure() => self.fail_submission(format!(
                "API call failed with server response: {}",
                response.response
            )),
            Ok(_) => {
                let timer = self.timers.arm(TimerPurpose::Settle);
                vec![Command::Schedule {
                    timer,
                    after: self.config.settle_delay(),
                }]
            }
            Err(err) => self.fail_submission(err.to_string()),
        }
    }

    /// Delivers an elapsed timer. Stale handles are ignored.
    pub fn timer_fired(&mut self, timer: TimerId) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }
        let Some(purpose) = self.timers.take(timer) else {
            debug!(?timer, "ignoring stale timer");
            return Vec::new();
        };
        match purpose {
            TimerPurpose::ClearStatus => {
                self.status_message = None;
                self.feedback.announce(None);
                Vec::new()
            }
            TimerPurpose::Settle => self.finish_submission(),
            TimerPurpose::Redirect => {
                info!(path = %self.config.login_route, "redirecting after signup");
                self.navigator.go_to(&self.config.login_route);
                Vec::new()
            }
            TimerPurpose::RequestTimeout => {
                if self.status == Status::Loading {
                    self.fail_submission(REQUEST_TIMED_OUT)
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Ends the session: all timer handles are dropped and every later
    /// event becomes a no-op, so state is never updated after teardown.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        debug!("tearing down submission controller");
        self.torn_down = true;
        self.timers.clear();
        self.in_flight = None;
    }

    fn finish_submission(&mut self) -> Vec<Command> {
        let Some(pending) = self.in_flight.take() else {
            return Vec::new();
        };
        match self.record_account(&pending) {
            Ok(()) => {
                info!(email = %pending.email, "account created");
                self.notifier
                    .notify(Notification::new(NOTIFY_TITLE, NOTIFY_BODY));
                self.set_sticky_status(STATUS_SUCCESS);
                let timer = self.timers.arm(TimerPurpose::Redirect);
                self.status = Status::Idle;
                vec![Command::Schedule {
                    timer,
                    after: self.config.redirect_delay(),
                }]
            }
            Err(failure) => self.fail_submission(failure.message()),
        }
    }

    fn record_account(&mut self, pending: &PendingSubmission) -> Result<(), BookkeepingFailure> {
        let mut users = self
            .repository
            .load_users()
            .map_err(BookkeepingFailure::Store)?;
        // The remote account already exists by the time this check runs;
        // rejection here only affects local bookkeeping.
        if users.iter().any(|user| user.email == pending.email) {
            return Err(BookkeepingFailure::Duplicate);
        }
        users.push(AccountRecord::new(&pending.name, &pending.email));
        self.repository
            .save_users(&users)
            .map_err(BookkeepingFailure::Store)?;

        if let Some(profile) = &self.profile {
            if profile.display_name != pending.name {
                let updated = profile.with_display_name(&pending.name);
                self.repository
                    .save_profile(&updated)
                    .map_err(BookkeepingFailure::Store)?;
                self.profile = Some(updated);
            }
        }
        Ok(())
    }

    fn fail_submission(&mut self, message: impl Into<String>) -> Vec<Command> {
        let message = message.into();
        let message = if message.is_empty() {
            GENERAL_FAILURE_FALLBACK.to_string()
        } else {
            message
        };
        error!(%message, "signup failed");
        self.set_errors(FormErrors::general(message));
        self.status = Status::Idle;
        self.in_flight = None;
        self.set_transient_status(STATUS_FAILURE)
    }

    fn set_errors(&mut self, errors: FormErrors) {
        self.focus = errors.focus_target();
        self.errors = errors;
        if let Some(target) = self.focus {
            self.feedback.focus(target);
        }
    }

    /// Publishes a status message that clears itself after the configured
    /// delay, so repeated identical announcements are never stuck.
    fn set_transient_status(&mut self, message: &str) -> Vec<Command> {
        self.status_message = Some(message.to_string());
        self.feedback.announce(Some(message));
        let timer = self.timers.arm(TimerPurpose::ClearStatus);
        vec![Command::Schedule {
            timer,
            after: self.config.status_clear(),
        }]
    }

    /// Publishes a status message that navigation is expected to supersede.
    /// Any pending clear timer is dropped so it cannot wipe this message.
    fn set_sticky_status(&mut self, message: &str) {
        self.timers.cancel(TimerPurpose::ClearStatus);
        self.status_message = Some(message.to_string());
        self.feedback.announce(Some(message));
    }
}
