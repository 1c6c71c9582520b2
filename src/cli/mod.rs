//! CLI entrypoint module structure.
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::{
    extension::{self, OPEN_COMMAND_ID},
    host::TerminalHost,
    settings::LayeredSettings,
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::{CliCommand, LaunchProfileArgs, ParsedCommand};
pub use exit::RuntimeExit;
pub use profile::{
    resolve_extension_dir, resolve_global_settings_path, resolve_workspace_root, LaunchProfile,
};

/// Load settings, activate, and run the selected command against the terminal host.
pub async fn execute_cli_command(parsed: ParsedCommand) -> Result<ExitCode> {
    let ParsedCommand {
        profile,
        command,
        quiet,
    } = parsed;
    let settings = LayeredSettings::load(&profile.settings_files)?;
    let activation = extension::activate(&settings);

    let exit_code = match command {
        CliCommand::Open => {
            let host = TerminalHost::new(quiet);
            let context = profile.invocation_context();
            match activation
                .execute(OPEN_COMMAND_ID, &context, &settings, &host)
                .await
            {
                Ok(()) => ExitCode::SUCCESS,
                // Already shown to the user as a notification.
                Err(_) => ExitCode::FAILURE,
            }
        }
        CliCommand::StatusBar => {
            if let Some(item) = activation.status_bar_item() {
                let serialized =
                    serde_json::to_string(item).context("failed to serialize status-bar item")?;
                println!("{serialized}");
            }
            ExitCode::SUCCESS
        }
        CliCommand::Commands => {
            for command in activation.commands() {
                println!("{}\t{}", command.id, command.title);
            }
            ExitCode::SUCCESS
        }
    };

    extension::deactivate();
    Ok(exit_code)
}
