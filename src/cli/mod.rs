//! Terminal front-end for the registration flow.
//!
//! The front-end stays a boundary caller: it collects field values, hands
//! them to the submission controller, and renders whatever the feedback
//! collaborators report back.

pub mod feedback;
pub mod output;
pub mod prompts;

use std::env;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

use thiserror::Error;

use crate::config::ConfigManager;
use crate::core::{SignupRunner, SubmissionController};
use crate::domain::FormInput;
use crate::errors::StoreError;
use crate::gateway::StaticGateway;
use crate::storage::{default_base_dir, JsonStore, KeyValueStore, MemoryStore, SignupRepository};

use feedback::{CliNavigator, TerminalFeedback, TerminalNotifier};
use prompts::PromptError;

/// Environment override for the stand-in gateway's response body.
pub const GATEWAY_RESPONSE_ENV: &str = "SIGNUP_GATEWAY_RESPONSE";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Base directory for the store and config files; platform data dir
    /// when unset.
    pub base_dir: Option<PathBuf>,
    /// Keep all persistence in memory for this session.
    pub ephemeral: bool,
    /// Use spoken-friendly plain labels instead of colored glyphs.
    pub screen_reader: bool,
}

/// Runs registration sessions until the user signs up or stops answering.
pub fn run(options: CliOptions) -> Result<(), CliError> {
    let base = options.base_dir.clone().unwrap_or_else(default_base_dir);
    let config = ConfigManager::new(&base)?.load()?;
    let store: Box<dyn KeyValueStore> = if options.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonStore::new(Some(base))?)
    };
    let repository = SignupRepository::new(store);

    let navigator = CliNavigator::new();
    let navigated = navigator.navigated_flag();
    let controller = SubmissionController::new(
        repository,
        Box::new(TerminalFeedback),
        Box::new(TerminalNotifier),
        Box::new(navigator),
        config,
    );

    apply_output_preferences(&options, &controller);
    greet(&controller);

    let response = env::var(GATEWAY_RESPONSE_ENV).unwrap_or_else(|_| "ok".into());
    let mut runner = SignupRunner::new(controller, StaticGateway::new(response));

    loop {
        let initial = runner.controller().initial_input();
        let Some(input) = collect_input(&initial)? else {
            break;
        };
        runner.submit(&input);
        if navigated.load(Ordering::SeqCst) {
            break;
        }
        let summary = output::render_errors(runner.controller().errors());
        if !summary.is_empty() {
            output::error(summary);
        }
    }

    runner.teardown();
    Ok(())
}

fn apply_output_preferences(options: &CliOptions, controller: &SubmissionController) {
    let profile_wants_screen_reader = controller
        .profile()
        .is_some_and(|profile| profile.accessibility_needs.contains("screen"));
    output::set_preferences(output::OutputPreferences {
        screen_reader_mode: options.screen_reader || profile_wants_screen_reader,
        quiet_mode: false,
    });
}

fn greet(controller: &SubmissionController) {
    output::info("Create Account");
    if let Some(profile) = controller.profile() {
        if let Some(avatar) = &profile.avatar {
            output::info(format!("Using saved avatar {}", avatar));
        }
        if !profile.display_name.is_empty() {
            output::info(format!("Welcome back, {}", profile.display_name));
        }
    }
}

/// Collects one round of field values. `None` means the user stopped
/// answering (end of scripted input).
fn collect_input(initial: &FormInput) -> Result<Option<FormInput>, CliError> {
    let name_default = (!initial.name.is_empty()).then_some(initial.name.as_str());
    let Some(name) = prompts::text("Full name", name_default)? else {
        return Ok(None);
    };
    let Some(email) = prompts::text("Email", None)? else {
        return Ok(None);
    };
    let Some(password) = prompts::secret("Password")? else {
        return Ok(None);
    };
    let Some(confirm_password) = prompts::secret("Confirm password")? else {
        return Ok(None);
    };
    let Some(agree_terms) =
        prompts::confirm("I agree to the Terms of Service and Privacy Policy", false)?
    else {
        return Ok(None);
    };

    Ok(Some(FormInput {
        name,
        email,
        password,
        confirm_password,
        agree_terms,
    }))
}
