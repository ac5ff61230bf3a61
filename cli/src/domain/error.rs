//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Validation errors ─────────────────────────────────────────────────────────

/// Errors raised while validating an app directory.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No package.json found in {0}. Is this a Zapier app directory?")]
    MissingManifest(String),

    #[error("Cannot parse {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("App validation failed:\n{}", bullet_list(.0))]
    Invalid(Vec<String>),
}

// ── Credential errors ─────────────────────────────────────────────────────────

/// Errors related to the stored deploy key.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("No deploy key found in {0}. Run 'zapier login' first.")]
    NotFound(String),

    #[error("Cannot read credentials from {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Deploy key must not be empty.")]
    EmptyKey,

    #[error("Refusing to prompt for a deploy key in non-interactive mode. Pass --deploy-key instead.")]
    PromptUnavailable,
}

// ── Command errors ────────────────────────────────────────────────────────────

/// Errors raised by child processes.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The child ran but exited unsuccessfully. `code` is `None` when the
    /// child was terminated by a signal.
    #[error("{program} exited with {}", describe_exit(.code))]
    Failed { program: String, code: Option<i32> },
}

#[allow(clippy::ref_option)] // thiserror hands fields over by reference
fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |c| format!("code {c}"))
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl CommandError {
    /// Exit code the CLI should propagate for this failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Failed { code, .. } => code.filter(|c| *c != 0).unwrap_or(1),
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
