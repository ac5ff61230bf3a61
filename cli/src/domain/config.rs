//! Domain types and validators for Zapier CLI configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use anyhow::Result;
use semver::VersionReq;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Endpoint used when neither the config file nor the environment set one.
pub const DEFAULT_BASE_ENDPOINT: &str = "https://zapier.com";

/// Credential file name, relative to the home directory.
pub const DEFAULT_AUTH_FILE: &str = ".zapierrc";

/// Runtime requirement applied by the version gate.
pub const DEFAULT_NODE_VERSION: &str = ">=18.0.0";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.zapier/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZapierConfig {
    /// Base URL exported to the test suite as `ZAPIER_BASE_ENDPOINT`.
    pub base_endpoint: String,
    /// Credential file holding the deploy key. `None` means `~/.zapierrc`.
    pub auth_location: Option<String>,
    /// Semver requirement the local `node` must satisfy.
    pub node_version: String,
}

impl Default for ZapierConfig {
    fn default() -> Self {
        Self {
            base_endpoint: DEFAULT_BASE_ENDPOINT.to_string(),
            auth_location: None,
            node_version: DEFAULT_NODE_VERSION.to_string(),
        }
    }
}

impl ZapierConfig {
    /// Parse `node_version` as a semver requirement.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the requirement does not parse.
    pub fn node_requirement(&self) -> Result<VersionReq> {
        VersionReq::parse(&self.node_version).map_err(|e| {
            ConfigError::InvalidValue {
                key: "node_version".to_string(),
                value: self.node_version.clone(),
                reason: format!("Expected a semver requirement such as '>=18.0.0' ({e})"),
            }
            .into()
        })
    }

    /// Apply environment overrides on top of file values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        base_endpoint: Option<String>,
        auth_location: Option<String>,
    ) -> Self {
        if let Some(endpoint) = base_endpoint.filter(|e| !e.is_empty()) {
            self.base_endpoint = endpoint;
        }
        if let Some(location) = auth_location.filter(|l| !l.is_empty()) {
            self.auth_location = Some(location);
        }
        self
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
