//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Build, validate and test Zapier platform apps
#[derive(Parser)]
#[command(
    name = "zapier",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honoured via `NO_COLOR`)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Never prompt; fail instead of asking for input
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Tests your app via `npm test`
    #[command(long_about = commands::test::LONG_ABOUT)]
    Test(commands::test::TestArgs),

    /// Validates your app's structure locally
    Validate,

    /// Stores your deploy key for later commands
    Login(commands::login::LoginArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            yes,
            command,
        } = self;
        let flags = AppFlags {
            output: OutputFlags { no_color, quiet },
            behaviour: BehaviourFlags { yes },
        };
        match command {
            Command::Version => {
                commands::version::run();
                Ok(ExitCode::SUCCESS)
            }
            Command::Test(args) => {
                let app = AppContext::new(&flags)?;
                commands::test::run(&args, &app).await
            }
            Command::Validate => {
                let app = AppContext::new(&flags)?;
                commands::validate::run(&app).await
            }
            Command::Login(args) => {
                let app = AppContext::new(&flags)?;
                commands::login::run(&args, &app).await
            }
        }
    }
}
