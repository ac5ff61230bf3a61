//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::{Credentials, VersionCheck, ZapierConfig};

// ── Runtime Version Port ──────────────────────────────────────────────────────

/// Decides whether the local runtime can run the app's test suite.
pub trait VersionGate {
    /// Synchronous and infallible: an undetectable runtime is reported as
    /// [`VersionCheck::Incompatible`].
    fn check(&self) -> VersionCheck;
}

// ── Validation Port ───────────────────────────────────────────────────────────

/// Validates an app directory before its tests run.
#[allow(async_fn_in_trait)]
pub trait AppValidator {
    /// Validate the app rooted at `app_dir`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::domain::ValidationError`] describing what is wrong.
    async fn validate(&self, app_dir: &Path) -> Result<()>;
}

// ── Credential Port ───────────────────────────────────────────────────────────

/// Reads and writes the stored deploy key.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// Read credentials from `location`.
    ///
    /// When `prompt` is `false` a missing key is an error; when `true` the
    /// store may ask the user for one and persist it.
    async fn read(&self, location: &Path, prompt: bool) -> Result<Credentials>;
    /// Persist credentials to `location`, replacing any existing file.
    async fn write(&self, location: &Path, credentials: &Credentials) -> Result<()>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// How the child's standard streams are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Child writes straight to the parent's terminal; nothing is captured.
    Inherit,
    /// Child stdout is piped back and returned to the caller.
    Capture,
}

/// Options for a single [`CommandRunner::run_command`] call.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions<'a> {
    pub stdio: StdioMode,
    /// Complete environment of the child. Nothing else is inherited.
    pub env: &'a BTreeMap<String, String>,
}

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` to completion.
    ///
    /// Returns captured stdout in [`StdioMode::Capture`], `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, and a
    /// [`crate::domain::CommandError`] if it exits unsuccessfully.
    async fn run_command(
        &self,
        program: &str,
        args: &[String],
        opts: &RunOptions<'_>,
    ) -> Result<Option<String>>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit a plain line of output.
    fn line(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the CLI configuration file.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<ZapierConfig>;
    /// Path of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
