//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::ZapierConfig;
use crate::domain::env::BASE_ENDPOINT_VAR;

/// Overrides the config file location.
pub const CONFIG_PATH_VAR: &str = "ZAPIER_CONFIG";
/// Overrides `auth_location` from the config file.
pub const AUTH_LOCATION_VAR: &str = "ZAPIER_AUTH_LOCATION";

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
///
/// Environment variables take precedence over file values.
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<ZapierConfig> {
        let path = self.path()?;
        let config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("cannot parse {}", path.display()))?
        } else {
            ZapierConfig::default()
        };
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config.with_overrides(
            std::env::var(BASE_ENDPOINT_VAR).ok(),
            std::env::var(AUTH_LOCATION_VAR).ok(),
        ))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_PATH_VAR) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".zapier").join("config.yaml"))
    }
}
