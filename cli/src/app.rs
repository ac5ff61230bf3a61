//! Application context: unified state passed to every command handler.
//!
//! `AppContext` bundles the loaded configuration, the terminal output context,
//! and the production port implementations so each command handler receives
//! one value instead of constructing its own collaborators.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::ZapierConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::credentials::{JsonCredentialStore, default_auth_location};
use crate::infra::node::NodeVersionGate;
use crate::infra::project::PackageJsonValidator;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `ZAPIER_YES` env vars).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Configuration after environment overrides.
    pub config: ZapierConfig,
    /// Deploy key storage.
    pub credentials: JsonCredentialStore,
    /// Child process runner.
    pub runner: TokioCommandRunner,
    /// App directory validator.
    pub validator: PackageJsonValidator,
    /// When `true`, never prompt.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `ZAPIER_YES`
    /// environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("ZAPIER_YES").is_ok();
        let non_interactive = flags.behaviour.yes || ci_env;

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            config: YamlConfigStore.load()?,
            credentials: JsonCredentialStore::new(!non_interactive),
            runner: TokioCommandRunner,
            validator: PackageJsonValidator,
            non_interactive,
        })
    }

    /// Credential file location: configured value or `~/.zapierrc`.
    ///
    /// # Errors
    ///
    /// Returns an error if no location is configured and the home directory
    /// cannot be determined.
    pub fn auth_location(&self) -> Result<PathBuf> {
        match &self.config.auth_location {
            Some(location) => Ok(PathBuf::from(location)),
            None => default_auth_location(),
        }
    }

    /// Version gate for the configured runtime requirement.
    ///
    /// # Errors
    ///
    /// Returns an error if `node_version` is not a valid semver requirement.
    pub fn version_gate(&self) -> Result<NodeVersionGate> {
        Ok(NodeVersionGate::new(self.config.node_requirement()?))
    }

    /// Progress reporter writing through this context's output settings.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
