//! Shared helpers for building the launch-script shell command.

use std::{
    fmt,
    path::Path,
    process::{Output, Stdio},
};

use tokio::process::Command;

/// Host operating system family, used only to pick a command template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Platform of the running process.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Unix => "unix",
        }
    }
}

/// Command string handed to the platform shell in a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand(String);

impl ShellCommand {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn from_raw(command: &str) -> Self {
        Self(command.to_string())
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the command that runs `script` against `workspace_root`.
///
/// Paths are wrapped in double quotes and otherwise passed through untouched.
pub fn build_launch_command(
    platform: Platform,
    script: &Path,
    workspace_root: &Path,
) -> ShellCommand {
    let powershell = is_powershell_script(script);
    let script = script.display();
    let root = workspace_root.display();
    let command = match platform {
        Platform::Windows => {
            format!(r#"powershell -ExecutionPolicy Bypass -File "{script}" -ProjectPath "{root}""#)
        }
        Platform::Unix if powershell => {
            format!(r#"pwsh -ExecutionPolicy Bypass -File "{script}" -ProjectPath "{root}""#)
        }
        Platform::Unix => format!(r#"bash "{script}" "{root}""#),
    };
    ShellCommand(command)
}

fn is_powershell_script(script: &Path) -> bool {
    script.to_string_lossy().ends_with(".ps1")
}

/// Wrap `command` in the system shell with `cwd` as the working directory.
pub fn shell_invocation(command: &ShellCommand, cwd: &Path) -> Command {
    let mut invocation = system_shell(command);
    invocation.kill_on_drop(false);
    invocation.current_dir(cwd);
    invocation.stdin(Stdio::null());
    invocation.stdout(Stdio::piped());
    invocation.stderr(Stdio::piped());
    invocation
}

#[cfg(windows)]
fn system_shell(command: &ShellCommand) -> Command {
    let mut shell = Command::new("cmd");
    shell.arg("/C").raw_arg(command.as_str());
    shell
}

#[cfg(not(windows))]
fn system_shell(command: &ShellCommand) -> Command {
    let mut shell = Command::new("/bin/sh");
    shell.arg("-c").arg(command.as_str());
    shell
}

/// Exit status and captured stderr of a finished child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stderr: String,
}

impl From<Output> for ProcessOutcome {
    fn from(output: Output) -> Self {
        Self {
            exit_code: output.status.code(),
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run `command` to completion. Stdout is discarded.
pub async fn run_shell_command(
    command: &ShellCommand,
    cwd: &Path,
) -> std::io::Result<ProcessOutcome> {
    shell_invocation(command, cwd)
        .output()
        .await
        .map(ProcessOutcome::from)
}
