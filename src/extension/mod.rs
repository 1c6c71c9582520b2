//! Command registration, status-bar contribution and the `openUnity.open` handler.
use std::path::PathBuf;

use serde::Serialize;
use tracing::Instrument;

use crate::{
    host::HostUi,
    lib::{
        errors::LaunchError,
        shell::{Platform, ProcessOutcome},
        telemetry::InvocationSpan,
    },
    settings::SettingsProvider,
};

pub mod launcher;
pub mod resolver;

pub use launcher::{Launcher, PROGRESS_TITLE, SUCCESS_MESSAGE};
pub use resolver::{bundled_script_path, resolve_script, ResolvedScript, ScriptSource};

pub const OPEN_COMMAND_ID: &str = "openUnity.open";
pub const OPEN_COMMAND_TITLE: &str = "Open Unity Project";
pub const STATUS_BAR_TEXT: &str = "$(symbol-misc) Unity";
pub const STATUS_BAR_PRIORITY: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarAlignment {
    Left,
    Right,
}

/// Clickable status-bar affordance bound to a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarItem {
    pub text: &'static str,
    pub tooltip: &'static str,
    pub command: &'static str,
    pub alignment: StatusBarAlignment,
    pub priority: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRegistration {
    pub id: &'static str,
    pub title: &'static str,
}

/// Per-invocation inputs supplied by the host.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub workspace_root: Option<PathBuf>,
    pub extension_dir: PathBuf,
    pub platform: Platform,
}

/// What a successful `openUnity.open` ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub script: ResolvedScript,
    pub outcome: ProcessOutcome,
}

/// Contributions made when the extension activates.
#[derive(Debug, Clone)]
pub struct Activation {
    commands: Vec<CommandRegistration>,
    status_bar_item: Option<StatusBarItem>,
}

/// Register the open command and, when enabled, the status-bar item.
pub fn activate<S>(settings: &S) -> Activation
where
    S: SettingsProvider + ?Sized,
{
    let status_bar_item = settings.show_in_status_bar().then_some(StatusBarItem {
        text: STATUS_BAR_TEXT,
        tooltip: OPEN_COMMAND_TITLE,
        command: OPEN_COMMAND_ID,
        alignment: StatusBarAlignment::Left,
        priority: STATUS_BAR_PRIORITY,
    });

    tracing::debug!(
        target: "open_unity::extension",
        status_bar = status_bar_item.is_some(),
        "Activated"
    );

    Activation {
        commands: vec![CommandRegistration {
            id: OPEN_COMMAND_ID,
            title: OPEN_COMMAND_TITLE,
        }],
        status_bar_item,
    }
}

pub fn deactivate() {}

impl Activation {
    pub fn commands(&self) -> &[CommandRegistration] {
        &self.commands
    }

    pub fn status_bar_item(&self) -> Option<&StatusBarItem> {
        self.status_bar_item.as_ref()
    }

    /// Dispatch a registered command id.
    pub async fn execute<S, H>(
        &self,
        command_id: &str,
        context: &InvocationContext,
        settings: &S,
        host: &H,
    ) -> Result<(), LaunchError>
    where
        S: SettingsProvider + ?Sized,
        H: HostUi,
    {
        let registered = self
            .commands
            .iter()
            .find(|command| command.id == command_id)
            .map(|command| command.id);

        match registered {
            Some(OPEN_COMMAND_ID) => open_project(context, settings, host).await.map(drop),
            _ => {
                let error = LaunchError::UnknownCommand {
                    id: command_id.to_string(),
                };
                host.show_error(&error.notification());
                Err(error)
            }
        }
    }
}

/// Handler behind `openUnity.open`.
///
/// Failures are terminal for the invocation and reported once through `host`
/// before being returned.
pub async fn open_project<S, H>(
    context: &InvocationContext,
    settings: &S,
    host: &H,
) -> Result<LaunchReport, LaunchError>
where
    S: SettingsProvider + ?Sized,
    H: HostUi,
{
    let span = InvocationSpan::start(OPEN_COMMAND_ID);
    let result = run_open(context, settings, host)
        .instrument(span.span().clone())
        .await;

    match &result {
        Ok(report) => span.finish("succeeded", report.outcome.exit_code),
        Err(LaunchError::CommandFailed { exit_code, .. }) => span.finish("command_failed", *exit_code),
        Err(err) => span.finish(err.kind(), None),
    }
    result
}

async fn run_open<S, H>(
    context: &InvocationContext,
    settings: &S,
    host: &H,
) -> Result<LaunchReport, LaunchError>
where
    S: SettingsProvider + ?Sized,
    H: HostUi,
{
    let Some(workspace_root) = context.workspace_root.as_deref() else {
        return Err(report_error(host, LaunchError::NoWorkspace));
    };

    let script = resolve_script(workspace_root, &context.extension_dir, settings)
        .map_err(|err| report_error(host, err))?;

    let outcome = Launcher::new(context.platform)
        .launch(&script.path, workspace_root, host)
        .await?;

    Ok(LaunchReport { script, outcome })
}

fn report_error<H: HostUi>(host: &H, error: LaunchError) -> LaunchError {
    host.show_error(&error.notification());
    error
}
