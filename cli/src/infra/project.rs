//! Infrastructure implementation of the `AppValidator` port.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::AppValidator;
use crate::domain::app::{AppManifest, validate_manifest};
use crate::domain::error::ValidationError;

/// Validates an app directory by reading its `package.json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackageJsonValidator;

impl AppValidator for PackageJsonValidator {
    async fn validate(&self, app_dir: &Path) -> Result<()> {
        let manifest_path = app_dir.join("package.json");
        let content = match tokio::fs::read_to_string(&manifest_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ValidationError::MissingManifest(app_dir.display().to_string()).into());
            }
            Err(e) => {
                return Err(ValidationError::Malformed {
                    path: manifest_path.display().to_string(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        let manifest: AppManifest =
            serde_json::from_str(&content).map_err(|e| ValidationError::Malformed {
                path: manifest_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let main_exists = tokio::fs::try_exists(app_dir.join(manifest.main_file()))
            .await
            .unwrap_or(false);
        tracing::debug!(
            manifest = %manifest_path.display(),
            main = manifest.main_file(),
            main_exists,
            "checking app manifest"
        );
        validate_manifest(&manifest, main_exists)
    }
}
