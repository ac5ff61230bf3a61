//! Runtime version compatibility.

use semver::{Version, VersionReq};

/// Result of comparing the local runtime against the required version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    Compatible,
    Incompatible { found: String, required: String },
}

impl VersionCheck {
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }
}

/// Compare a raw `node --version` string (e.g. `v20.11.1`) against `required`.
///
/// Anything that does not parse as a version is incompatible.
#[must_use]
pub fn check_version(raw: Option<&str>, required: &VersionReq) -> VersionCheck {
    let found = raw.map(str::trim).filter(|v| !v.is_empty());
    let parsed = found.and_then(|v| Version::parse(v.trim_start_matches('v')).ok());
    match parsed {
        Some(version) if required.matches(&version) => VersionCheck::Compatible,
        _ => VersionCheck::Incompatible {
            found: found.unwrap_or("unknown").to_string(),
            required: required.to_string(),
        },
    }
}
