//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod app;
pub mod config;
pub mod credentials;
pub mod env;
pub mod error;
pub mod version;

pub use app::{AppManifest, validate_manifest};
pub use config::ZapierConfig;
pub use credentials::Credentials;
pub use env::{EnvironmentOverlay, merge_env, test_command_args};
pub use error::{CommandError, ConfigError, CredentialError, ValidationError};
pub use version::{VersionCheck, check_version};
