//! External command execution
//!
//! Every step that shells out (clone, init, install) goes through a
//! [`CommandRunner`], so the orchestration can be exercised without git or npm.

use crate::error::ScaffoldError;
use anyhow::Result;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs an external program to completion inside a working directory
pub trait CommandRunner {
    /// Run `program args...` in `cwd`. A non-zero exit becomes
    /// [`ScaffoldError::CommandFailed`].
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> impl Future<Output = Result<()>>;
}

/// Spawns real processes and waits for them; no timeout is applied
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command = display_command(program, args);
        debug!(%command, cwd = %cwd.display(), "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ScaffoldError::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            debug!(%command, "command succeeded");
            return Ok(());
        }

        // Killed by a signal: no code to propagate
        let code = output.status.code().unwrap_or(1);
        debug!(%command, code, "command failed");
        Err(ScaffoldError::CommandFailed {
            command,
            code,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into())
    }
}

/// Render a command line for messages
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
