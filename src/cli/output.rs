use colored::Colorize;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;

use crate::config::Config;

/// Message categories used by the console output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Prompt,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color: bool,
    pub quiet: bool,
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            color: config.color,
            quiet: config.quiet,
        }
    }
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    colored::control::set_override(prefs.color);
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet && kind == MessageKind::Section
}

fn label(kind: MessageKind) -> Option<&'static str> {
    match kind {
        MessageKind::Success => Some("OK:"),
        MessageKind::Warning => Some("WARNING:"),
        MessageKind::Error => Some("ERROR:"),
        _ => None,
    }
}

/// Formats a message for display, or returns `None` when the current
/// preferences suppress it.
pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> Option<String> {
    let prefs = current_preferences();
    if should_skip(kind, &prefs) {
        return None;
    }

    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => match label(kind) {
            Some(label) => format!("{label} {text}"),
            None => text,
        },
    };

    if !prefs.color {
        return Some(base);
    }

    let styled = match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Prompt => base.bright_cyan().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    };
    Some(styled)
}
