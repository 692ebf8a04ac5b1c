use super::BuildCommand;
use crate::error::InstallError;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Executes external commands for the build step
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `command` in `cwd` to completion; any unsuccessful exit is an error
    async fn run(&self, command: &BuildCommand, cwd: &Path) -> Result<()>;
}

/// Spawns real child processes with the terminal attached
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &BuildCommand, cwd: &Path) -> Result<()> {
        let display = command.to_string();
        println!();
        println!("{} {}", "Running:".dimmed(), display.yellow());
        println!();

        let status = TokioCommand::new(command.program)
            .args(command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| InstallError::CommandFailed {
                command: display.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            let code = status
                .code()
                .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {}", c));
            return Err(InstallError::CommandFailed {
                command: display,
                reason: code,
            }
            .into());
        }

        Ok(())
    }
}
