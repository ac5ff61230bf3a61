//! Infrastructure implementation of the `VersionGate` port.

use std::process::Command;

use semver::VersionReq;

use crate::application::ports::VersionGate;
use crate::domain::version::{VersionCheck, check_version};

/// Compares the `node` on `PATH` against a semver requirement.
pub struct NodeVersionGate {
    program: String,
    args: Vec<String>,
    required: VersionReq,
}

impl NodeVersionGate {
    #[must_use]
    pub fn new(required: VersionReq) -> Self {
        Self::with_command("node", &["--version"], required)
    }

    /// Probe with an arbitrary command whose stdout is the version string.
    #[must_use]
    pub fn with_command(program: impl Into<String>, args: &[&str], required: VersionReq) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
            required,
        }
    }

    fn detect(&self) -> Option<String> {
        match Command::new(&self.program).args(&self.args).output() {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
            Ok(output) => {
                tracing::debug!(program = %self.program, code = ?output.status.code(), "version probe failed");
                None
            }
            Err(e) => {
                tracing::debug!(program = %self.program, error = %e, "version probe could not run");
                None
            }
        }
    }
}

impl VersionGate for NodeVersionGate {
    fn check(&self) -> VersionCheck {
        let found = self.detect();
        tracing::debug!(found = ?found, required = %self.required, "checking runtime version");
        check_version(found.as_deref(), &self.required)
    }
}
