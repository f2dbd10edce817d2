//! Terminal output helpers for the signup front-end.
//!
//! All user-visible lines flow through this module so the screen-reader
//! preference can swap colored glyph labels for plain spoken-friendly ones.

use colored::Colorize;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;

use crate::domain::FormErrors;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Status,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub screen_reader_mode: bool,
    pub quiet_mode: bool,
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[✓]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Status => ("STATUS", "[~]"),
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let (spoken, glyph) = build_label(kind);
    if prefs.screen_reader_mode {
        return format!("{}: {}", spoken, text);
    }
    let label = match kind {
        MessageKind::Info => glyph.cyan(),
        MessageKind::Success => glyph.green(),
        MessageKind::Warning => glyph.yellow(),
        MessageKind::Error => glyph.red(),
        MessageKind::Status => glyph.blue(),
    };
    format!("{} {}", label, text)
}

pub fn emit(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    if prefs.quiet_mode && matches!(kind, MessageKind::Info) {
        return;
    }
    println!("{}", apply_style(kind, message, &prefs));
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

pub fn status(message: impl fmt::Display) {
    emit(MessageKind::Status, message);
}

/// Plain-text block listing every current error, field errors first.
pub fn render_errors(errors: &FormErrors) -> String {
    let mut lines = Vec::new();
    for (target, message) in errors.entries() {
        lines.push(format!("  {}: {}", target.label(), message));
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!("Please fix the following:\n{}", lines.join("\n"))
    }
}
