//! Zapier CLI - build, validate and test Zapier platform apps

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zapier_cli::cli::Cli;
use zapier_cli::domain::CommandError;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so they never mix with the test runner's stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<CommandError>()
                .map_or(1, CommandError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
