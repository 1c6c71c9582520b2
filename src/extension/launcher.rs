//! Runs the resolved script once and reports the outcome through the host.
use std::path::Path;

use tracing::info;

use crate::{
    host::HostUi,
    lib::{
        errors::LaunchError,
        shell::{build_launch_command, run_shell_command, Platform, ProcessOutcome, ShellCommand},
    },
};

pub const PROGRESS_TITLE: &str = "Opening Unity project…";
pub const SUCCESS_MESSAGE: &str = "Unity project opened.";

#[derive(Debug, Clone, Copy)]
pub struct Launcher {
    platform: Platform,
}

impl Launcher {
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn command_for(&self, script: &Path, workspace_root: &Path) -> ShellCommand {
        build_launch_command(self.platform, script, workspace_root)
    }

    /// Execute `script` with `workspace_root` as argument and cwd.
    ///
    /// Exactly one notification is shown: info on success, error otherwise.
    pub async fn launch<H>(
        &self,
        script: &Path,
        workspace_root: &Path,
        host: &H,
    ) -> Result<ProcessOutcome, LaunchError>
    where
        H: HostUi,
    {
        let command = self.command_for(script, workspace_root);
        info!(
            target: "open_unity::launcher",
            platform = self.platform.as_str(),
            command = %command,
            cwd = %workspace_root.display(),
            "Starting launch script"
        );

        let result = host
            .with_progress(PROGRESS_TITLE, execute(&command, workspace_root))
            .await;

        match &result {
            Ok(outcome) => {
                info!(
                    target: "open_unity::launcher",
                    exit_code = outcome.exit_code,
                    "Launch script succeeded"
                );
                host.show_info(SUCCESS_MESSAGE);
            }
            Err(err) => {
                info!(
                    target: "open_unity::launcher",
                    kind = err.kind(),
                    reason = %err,
                    "Launch script failed"
                );
                host.show_error(&err.notification());
            }
        }
        result
    }
}

async fn execute(command: &ShellCommand, cwd: &Path) -> Result<ProcessOutcome, LaunchError> {
    let outcome = run_shell_command(command, cwd)
        .await
        .map_err(|err| LaunchError::spawn(command, err))?;
    if !outcome.success {
        return Err(LaunchError::command_failed(command, &outcome));
    }
    Ok(outcome)
}
