//! Application service: app test use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! The run is strictly sequential: version check, validation, credential
//! read, then a single `npm run --silent test` child. A failure at any step
//! stops the run before the child is spawned, and the child only ever sees a
//! fully built environment.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::{
    AppValidator, CommandRunner, CredentialStore, ProgressReporter, RunOptions, StdioMode,
    VersionGate,
};
use crate::domain::env::{
    DEPLOY_KEY_VAR, EnvironmentOverlay, TEST_PROGRAM, merge_env, test_command_args,
};
use crate::domain::version::VersionCheck;

/// Explicit inputs of a test run.
#[derive(Debug, Clone)]
pub struct TestOptions {
    /// Export the platform's debug logging flags to the test process.
    pub debug: bool,
    /// Forwarded to the test framework as `--timeout=<value>`, unvalidated.
    pub timeout: Option<String>,
    /// Exported as `ZAPIER_BASE_ENDPOINT`.
    pub base_endpoint: String,
    /// Credential file holding the deploy key.
    pub auth_location: PathBuf,
    /// Root of the app under test.
    pub app_dir: PathBuf,
    /// Environment the child inherits before the overlay is applied.
    pub inherited_env: BTreeMap<String, String>,
}

/// Outcome of the `run_tests` use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// The test runner ran and exited successfully.
    Completed,
    /// The local runtime is unsupported; nothing after the check ran.
    VersionMismatch { found: String, required: String },
}

/// Validate the app, load the deploy key, and run its test suite.
///
/// Errors from the validator, the credential store, and the runner are
/// returned unchanged. A runtime version mismatch is not an error; it is
/// reported as [`TestOutcome::VersionMismatch`].
///
/// # Errors
///
/// Returns the first error raised by any collaborator.
pub async fn run_tests(
    gate: &impl VersionGate,
    validator: &impl AppValidator,
    store: &impl CredentialStore,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    opts: TestOptions,
) -> Result<TestOutcome> {
    let TestOptions {
        debug: debug_logs,
        timeout,
        base_endpoint,
        auth_location,
        app_dir,
        inherited_env,
    } = opts;

    let mut overlay = EnvironmentOverlay::new(&base_endpoint, debug_logs);
    tracing::debug!(debug_logs, endpoint = %base_endpoint, "built environment overlay");

    if let VersionCheck::Incompatible { found, required } = gate.check() {
        reporter.warn(&format!(
            "Your node version is {found}, but {required} is required."
        ));
        tracing::debug!(%found, %required, "runtime version mismatch, skipping tests");
        return Ok(TestOutcome::VersionMismatch { found, required });
    }

    validator.validate(&app_dir).await?;
    tracing::debug!(app_dir = %app_dir.display(), "app validated");

    reporter.line(&format!(
        "Adding {} to environment as {DEPLOY_KEY_VAR}...",
        auth_location.display()
    ));
    let credentials = store.read(&auth_location, false).await?;
    overlay.set_deploy_key(&credentials.deploy_key);

    let env = merge_env(inherited_env, &overlay);
    let args = test_command_args(timeout.as_deref());

    reporter.line("Running test suite.");
    tracing::debug!(program = TEST_PROGRAM, ?args, "spawning test runner");
    let output = runner
        .run_command(
            TEST_PROGRAM,
            &args,
            &RunOptions {
                stdio: StdioMode::Inherit,
                env: &env,
            },
        )
        .await?;

    if let Some(stdout) = output.filter(|s| !s.is_empty()) {
        reporter.line(&stdout);
    }

    Ok(TestOutcome::Completed)
}
