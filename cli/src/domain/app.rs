//! Pure app manifest validation: no I/O, no async.
//!
//! The manifest is the subset of `package.json` the CLI relies on. Callers
//! read the file and check the `main` entry point; this module only decides.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use serde::Deserialize;

use crate::domain::error::ValidationError;

/// npm package names: optional scope, lowercase, URL-safe.
pub static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern, checked by the unit tests below.
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?:@[a-z0-9~-][a-z0-9._~-]*/)?[a-z0-9~-][a-z0-9._~-]*$").expect("valid regex")
});

/// Runtime library every app must depend on.
pub const CORE_PACKAGE: &str = "zapier-platform-core";

/// Entry point assumed when `main` is absent.
pub const DEFAULT_MAIN: &str = "index.js";

/// Maximum npm package name length.
const MAX_NAME_LEN: usize = 214;

/// Fields of `package.json` checked before tests run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub main: Option<String>,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
}

impl AppManifest {
    /// Entry point file, relative to the app directory.
    #[must_use]
    pub fn main_file(&self) -> &str {
        self.main
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MAIN)
    }
}

/// Validate a parsed manifest. `main_exists` reports whether
/// [`AppManifest::main_file`] is present on disk.
///
/// Collects every violation before failing.
///
/// # Errors
///
/// Returns [`ValidationError::Invalid`] listing all violations if any check
/// fails.
pub fn validate_manifest(manifest: &AppManifest, main_exists: bool) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    match manifest.name.as_deref() {
        None | Some("") => errors.push("package.json is missing \"name\"".to_string()),
        Some(name) if name.len() > MAX_NAME_LEN || !PACKAGE_NAME_RE.is_match(name) => {
            errors.push(format!("\"name\" '{name}' is not a valid npm package name"));
        }
        Some(_) => {}
    }

    match manifest.version.as_deref() {
        None | Some("") => errors.push("package.json is missing \"version\"".to_string()),
        Some(version) if semver::Version::parse(version).is_err() => {
            errors.push(format!("\"version\" '{version}' is not valid semver"));
        }
        Some(_) => {}
    }

    if !main_exists {
        errors.push(format!(
            "entry point '{}' does not exist",
            manifest.main_file()
        ));
    }

    if !manifest.scripts.contains_key("test") {
        errors.push("package.json has no \"test\" script".to_string());
    }

    if !manifest.dependencies.contains_key(CORE_PACKAGE) {
        errors.push(format!("\"dependencies\" must include {CORE_PACKAGE}"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Invalid(errors).into())
    }
}
