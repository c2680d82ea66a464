use std::io;

use thiserror::Error;

/// Failures raised by the recipe store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("index {index} is out of range (collection holds {len} recipes)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("recipe `{0}` already exists")]
    DuplicateName(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures raised while building, rendering, or navigating a menu.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid column spec: {0}")]
    InvalidColumnSpec(String),
    #[error("not a valid command: `{token}`{}", suggestion_hint(.suggestion))]
    UnknownCommand {
        token: String,
        suggestion: Option<String>,
    },
    #[error("option {option} is outside the valid range 1-{count}")]
    OptionOutOfRange { option: i64, count: usize },
    #[error("{0}")]
    Validation(String),
    #[error("end of input")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Configuration load/save failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Configuration error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Top-level error for the interactive application.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|best| format!(" (did you mean `{best}`?)"))
        .unwrap_or_default()
}
