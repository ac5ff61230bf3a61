//! `zapier validate`: check the app in the current directory.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::services::validate as service;

/// Run `zapier validate`.
///
/// # Errors
///
/// Returns the validation error if the app is invalid.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let app_dir = std::env::current_dir().context("cannot determine current directory")?;
    service::validate_app(&app.validator, &app.terminal_reporter(), &app_dir).await?;
    Ok(ExitCode::SUCCESS)
}
