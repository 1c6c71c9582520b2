//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{lib::shell::Platform, settings::SettingsFiles};

use super::{
    resolve_extension_dir, resolve_global_settings_path, resolve_workspace_root, LaunchProfile,
};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub profile: LaunchProfile,
    pub command: CliCommand,
    pub quiet: bool,
}

/// Top-level CLI commands. `open` runs when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum CliCommand {
    /// Run the launch script for the workspace (`openUnity.open`).
    #[default]
    Open,
    /// Print the status-bar item as JSON, or nothing when it is disabled.
    StatusBar,
    /// List registered command ids.
    Commands,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Open the current workspace as a Unity project",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Workspace root (overrides OPEN_UNITY_WORKSPACE).
    #[arg(long = "workspace", global = true)]
    pub workspace_override: Option<PathBuf>,
    /// Installation directory holding the bundled scripts (overrides OPEN_UNITY_EXTENSION_DIR).
    #[arg(long = "extension-dir", global = true)]
    pub extension_dir_override: Option<PathBuf>,
    /// Global settings file (overrides OPEN_UNITY_SETTINGS).
    #[arg(long = "settings", global = true)]
    pub settings_override: Option<PathBuf>,
    /// Suppress progress and informational messages.
    #[arg(long, short, default_value_t = false, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(&self) -> Result<LaunchProfile> {
        let workspace_root = resolve_workspace_root(self.workspace_override.clone())?;
        let extension_dir = resolve_extension_dir(self.extension_dir_override.clone())?;
        let settings_files = SettingsFiles::for_workspace(
            resolve_global_settings_path(self.settings_override.clone()),
            workspace_root.as_deref(),
        );

        Ok(LaunchProfile {
            workspace_root,
            extension_dir,
            settings_files,
            platform: Platform::current(),
        })
    }

    pub fn into_command(self) -> Result<ParsedCommand> {
        Ok(ParsedCommand {
            profile: self.build()?,
            command: self.command.unwrap_or_default(),
            quiet: self.quiet,
        })
    }
}
