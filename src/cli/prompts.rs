//! Input collection for the signup form.
//!
//! Interactive sessions use dialoguer prompts. When `SIGNUP_CLI_SCRIPT` is
//! set, answers are read line by line from stdin instead, which keeps the
//! binary drivable from integration tests.

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use thiserror::Error;

pub const SCRIPT_ENV: &str = "SIGNUP_CLI_SCRIPT";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input error: {0}")]
    Io(#[from] io::Error),
    #[error("prompt error: {0}")]
    Dialog(#[from] dialoguer::Error),
}

fn script_mode() -> bool {
    std::env::var(SCRIPT_ENV).is_ok_and(|value| !value.is_empty() && value != "0")
}

/// Next scripted answer; `None` once stdin is exhausted.
fn next_script_line() -> Result<Option<String>, PromptError> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Free-form text prompt. Empty input falls back to the default when one is
/// given; validation of the value itself belongs to the core.
pub fn text(prompt: &str, default: Option<&str>) -> Result<Option<String>, PromptError> {
    if script_mode() {
        return Ok(next_script_line()?.map(|line| {
            if line.is_empty() {
                default.unwrap_or_default().to_string()
            } else {
                line
            }
        }));
    }
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(Some(input.interact_text()?))
}

/// Masked prompt; never echoes the value.
pub fn secret(prompt: &str) -> Result<Option<String>, PromptError> {
    if script_mode() {
        return next_script_line();
    }
    let theme = ColorfulTheme::default();
    let value = Password::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(Some(value))
}

/// Yes/no prompt. Scripted answers accept y/yes/true (case-insensitive).
pub fn confirm(prompt: &str, default: bool) -> Result<Option<bool>, PromptError> {
    if script_mode() {
        return Ok(next_script_line()?.map(|line| {
            let normalized = line.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                default
            } else {
                matches!(normalized.as_str(), "y" | "yes" | "true" | "1")
            }
        }));
    }
    let theme = ColorfulTheme::default();
    let value = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(Some(value))
}
