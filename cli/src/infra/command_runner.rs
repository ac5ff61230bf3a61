//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::application::ports::{CommandRunner, RunOptions, StdioMode};
use crate::domain::error::CommandError;

/// Production `CommandRunner`. Spawns the child with exactly the supplied
/// environment and waits for it without a deadline.
///
/// `kill_on_drop` is set so a child never outlives the runtime that spawned
/// it (e.g. on Ctrl-C).
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_command(
        &self,
        program: &str,
        args: &[String],
        opts: &RunOptions<'_>,
    ) -> Result<Option<String>> {
        let mut command = tokio::process::Command::new(resolve_program(program));
        command
            .args(args)
            .env_clear()
            .envs(opts.env)
            .kill_on_drop(true);

        match opts.stdio {
            StdioMode::Inherit => {
                command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            StdioMode::Capture => {
                command
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::inherit());
            }
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;
        tracing::debug!(program, pid = child.id(), "spawned child process");

        let mut stdout_handle = child.stdout.take();
        let (status, stdout) = tokio::join!(child.wait(), async {
            let mut buf = Vec::new();
            if let Some(ref mut h) = stdout_handle {
                let _ = h.read_to_end(&mut buf).await;
            }
            buf
        });
        let status = status.with_context(|| format!("waiting for {program}"))?;
        tracing::debug!(program, code = ?status.code(), "child process exited");

        if !status.success() {
            return Err(CommandError::Failed {
                program: program.to_string(),
                code: status.code(),
            }
            .into());
        }

        Ok(match opts.stdio {
            StdioMode::Inherit => None,
            StdioMode::Capture => Some(String::from_utf8_lossy(&stdout).into_owned()),
        })
    }
}

/// npm ships as a batch shim on Windows, which `CreateProcess` will not find
/// under its bare name.
fn resolve_program(program: &str) -> String {
    if cfg!(windows) && program == "npm" {
        "npm.cmd".to_string()
    } else {
        program.to_string()
    }
}
