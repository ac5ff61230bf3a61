//! Application service: app validation use-case.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{AppValidator, ProgressReporter};

/// Validate the app in `app_dir` and report the result.
///
/// # Errors
///
/// Returns the validator's error unchanged.
pub async fn validate_app(
    validator: &impl AppValidator,
    reporter: &impl ProgressReporter,
    app_dir: &Path,
) -> Result<()> {
    reporter.line("Validating project locally.");
    validator.validate(app_dir).await?;
    reporter.success("No structural errors found during validation routine.");
    Ok(())
}
