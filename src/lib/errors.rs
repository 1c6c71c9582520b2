use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::lib::shell::{ProcessOutcome, ShellCommand};

/// Prefix prepended to every error notification.
pub const NOTIFICATION_PREFIX: &str = "Open Unity: ";

/// Errors that can occur while loading settings files.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to build (read) a settings file.
    #[error("Failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into the settings layer.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Workspace path could not be turned into an absolute path.
    #[error("Workspace path {path} cannot be resolved: {source}")]
    InvalidWorkspace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SettingsError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures that end a single `openUnity.open` invocation.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No workspace folder is open.")]
    NoWorkspace,
    #[error("Script not found at \"{path}\". Check the open_unity.script_path setting.")]
    CustomScriptNotFound { path: PathBuf },
    #[error(
        "Bundled script missing at \"{path}\". The installation may be corrupted; reinstall open-unity."
    )]
    BundledScriptMissing { path: PathBuf },
    #[error("Command failed: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{message}")]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        message: String,
    },
    #[error("Command `{id}` is not registered")]
    UnknownCommand { id: String },
}

impl LaunchError {
    pub fn spawn(command: &ShellCommand, source: io::Error) -> Self {
        Self::Spawn {
            command: command.to_string(),
            source,
        }
    }

    /// Captured stderr becomes the message; an empty stderr falls back to the exit code.
    pub fn command_failed(command: &ShellCommand, outcome: &ProcessOutcome) -> Self {
        let stderr = outcome.stderr.trim_end();
        let message = if stderr.is_empty() {
            match outcome.exit_code {
                Some(code) => format!("Command failed: {command} (exit code {code})"),
                None => format!("Command failed: {command} (terminated by signal)"),
            }
        } else {
            stderr.to_string()
        };
        Self::CommandFailed {
            command: command.to_string(),
            exit_code: outcome.exit_code,
            message,
        }
    }

    /// Text shown in the error notification.
    pub fn notification(&self) -> String {
        format!("{NOTIFICATION_PREFIX}{self}")
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            LaunchError::NoWorkspace => "no_workspace",
            LaunchError::CustomScriptNotFound { .. } => "custom_script_not_found",
            LaunchError::BundledScriptMissing { .. } => "bundled_script_missing",
            LaunchError::Spawn { .. } => "spawn_failed",
            LaunchError::CommandFailed { .. } => "command_failed",
            LaunchError::UnknownCommand { .. } => "unknown_command",
        }
    }
}
