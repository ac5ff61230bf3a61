//! Infrastructure implementation of the `CredentialStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::CredentialStore;
use crate::domain::config::DEFAULT_AUTH_FILE;
use crate::domain::credentials::Credentials;
use crate::domain::error::CredentialError;

/// Credential location used when the config does not name one.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_auth_location() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.join(DEFAULT_AUTH_FILE))
}

/// Ask for a deploy key on the terminal without echoing it.
///
/// # Errors
///
/// Returns [`CredentialError::PromptUnavailable`] when `interactive` is
/// `false`, or an error if the terminal prompt fails (e.g. no TTY).
pub fn prompt_deploy_key(interactive: bool) -> Result<String> {
    if !interactive {
        return Err(CredentialError::PromptUnavailable.into());
    }
    dialoguer::Password::new()
        .with_prompt("Deploy key")
        .interact()
        .context("reading deploy key from terminal")
}

/// Production `CredentialStore` backed by a JSON file (`{"deployKey": "..."}`).
pub struct JsonCredentialStore {
    /// Whether `read(.., prompt = true)` may ask the user for a key.
    interactive: bool,
}

impl JsonCredentialStore {
    #[must_use]
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl CredentialStore for JsonCredentialStore {
    async fn read(&self, location: &Path, prompt: bool) -> Result<Credentials> {
        let path = location.to_path_buf();
        let stored = tokio::task::spawn_blocking(move || load_file(&path))
            .await
            .context("spawn_blocking for credential read")??;

        match stored {
            Some(credentials) if !credentials.is_empty() => Ok(credentials),
            _ if prompt => {
                let credentials = Credentials::new(prompt_deploy_key(self.interactive)?.trim());
                if credentials.is_empty() {
                    return Err(CredentialError::EmptyKey.into());
                }
                self.write(location, &credentials).await?;
                Ok(credentials)
            }
            _ => Err(CredentialError::NotFound(location.display().to_string()).into()),
        }
    }

    async fn write(&self, location: &Path, credentials: &Credentials) -> Result<()> {
        let path = location.to_path_buf();
        let content =
            serde_json::to_string_pretty(credentials).context("cannot serialize credentials")?;
        tokio::task::spawn_blocking(move || save_file(&path, &content))
            .await
            .context("spawn_blocking for credential write")?
    }
}

/// Missing file is `Ok(None)`; unreadable or unparsable content is an error.
fn load_file(path: &Path) -> Result<Option<Credentials>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CredentialError::Unreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into());
        }
    };
    if content.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| {
            CredentialError::Unreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

fn save_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("cannot write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("cannot set permissions on {}", path.display()))?;
    }
    Ok(())
}
