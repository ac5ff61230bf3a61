//! `zapier login`: store a deploy key.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::login as service;
use crate::infra::credentials::prompt_deploy_key;

/// Arguments for the login command.
#[derive(Args, Debug, Default)]
pub struct LoginArgs {
    /// Deploy key to store (prompted for when omitted)
    #[arg(long, env = "ZAPIER_DEPLOY_KEY", hide_env_values = true)]
    pub deploy_key: Option<String>,
}

/// Run `zapier login`.
///
/// # Errors
///
/// Returns an error if no key is given in non-interactive mode, the key is
/// empty, or the credential file cannot be written.
pub async fn run(args: &LoginArgs, app: &AppContext) -> Result<ExitCode> {
    let location = app.auth_location()?;
    let deploy_key = match &args.deploy_key {
        Some(key) => key.clone(),
        None => prompt_deploy_key(!app.non_interactive)?,
    };
    service::store_deploy_key(
        &app.credentials,
        &app.terminal_reporter(),
        &location,
        &deploy_key,
    )
    .await?;
    Ok(ExitCode::SUCCESS)
}
