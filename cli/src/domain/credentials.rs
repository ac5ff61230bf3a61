//! Stored deploy-key credentials.

use serde::{Deserialize, Serialize};

/// Contents of the credential file (`~/.zapierrc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Key authorizing deploy and test operations against the platform.
    #[serde(default)]
    pub deploy_key: String,
}

impl Credentials {
    #[must_use]
    pub fn new(deploy_key: impl Into<String>) -> Self {
        Self {
            deploy_key: deploy_key.into(),
        }
    }

    /// A credential file without a usable key is treated as missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deploy_key.trim().is_empty()
    }
}
