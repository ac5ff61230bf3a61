//! Application service: deploy key storage use-case.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CredentialStore, ProgressReporter};
use crate::domain::credentials::Credentials;
use crate::domain::error::CredentialError;

/// Store `deploy_key` at `location`.
///
/// # Errors
///
/// Returns [`CredentialError::EmptyKey`] for a blank key, or the store's
/// error if the write fails.
pub async fn store_deploy_key(
    store: &impl CredentialStore,
    reporter: &impl ProgressReporter,
    location: &Path,
    deploy_key: &str,
) -> Result<()> {
    let credentials = Credentials::new(deploy_key.trim());
    if credentials.is_empty() {
        return Err(CredentialError::EmptyKey.into());
    }
    store.write(location, &credentials).await?;
    tracing::info!(location = %location.display(), "deploy key stored");
    reporter.success(&format!("Your deploy key has been saved to {}.", location.display()));
    Ok(())
}
