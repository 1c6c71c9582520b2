use std::{fs, path::Path};

use open_unity::{
    extension::{
        self, bundled_script_path, open_project, resolve_script, Launcher, ScriptSource,
        OPEN_COMMAND_ID, PROGRESS_TITLE, SUCCESS_MESSAGE,
    },
    lib::{errors::LaunchError, shell::Platform},
    settings::{ConfigScope, MemorySettings},
};

use crate::common::{canonical, Fixture, HostEvent, RecordingHost};

const RECORDING_SCRIPT: &str = r#"#!/usr/bin/env bash
printf '%s\n' "$1" > invoked-with.txt
pwd > invoked-in.txt
"#;

fn override_settings(relative: &str) -> MemorySettings {
    MemorySettings::default().with_script_path(ConfigScope::Workspace, relative)
}

#[test]
fn windows_default_config_resolves_bundled_powershell_command() {
    let fixture = Fixture::new();
    fixture.write_bundled_script("param([string]$ProjectPath)\n");

    let resolved = resolve_script(
        Path::new("/proj"),
        fixture.extension.path(),
        &MemorySettings::default(),
    )
    .expect("bundled script resolves");
    let command =
        Launcher::new(Platform::Windows).command_for(&resolved.path, Path::new("/proj"));

    let expected_path = bundled_script_path(fixture.extension.path());
    assert_eq!(resolved.path, expected_path);
    assert_eq!(resolved.source, ScriptSource::Bundled);
    assert_eq!(
        command.as_str(),
        format!(
            r#"powershell -ExecutionPolicy Bypass -File "{}" -ProjectPath "/proj""#,
            expected_path.display()
        )
    );
}

#[tokio::test]
async fn no_workspace_reports_error_without_spawning() {
    let fixture = Fixture::new();
    fixture.write_bundled_script("exit 0\n");
    let host = RecordingHost::default();

    let error = open_project(
        &fixture.context_without_workspace(),
        &MemorySettings::default(),
        &host,
    )
    .await
    .expect_err("no workspace is open");

    assert!(matches!(error, LaunchError::NoWorkspace));
    assert_eq!(
        host.events(),
        vec![HostEvent::Error(
            "Open Unity: No workspace folder is open.".to_string()
        )]
    );
}

#[tokio::test]
async fn missing_custom_script_reports_resolved_path_without_spawning() {
    let fixture = Fixture::new();
    let host = RecordingHost::default();

    let error = open_project(&fixture.context(), &override_settings("tools/open.sh"), &host)
        .await
        .expect_err("custom script is missing");

    assert!(matches!(error, LaunchError::CustomScriptNotFound { .. }));
    assert_eq!(host.progress_started(), 0);
    let errors = host.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains(&fixture.workspace_file("tools/open.sh").display().to_string()));
    assert!(errors[0].contains("open_unity.script_path"));
}

#[tokio::test]
async fn missing_bundled_script_reports_corrupted_installation() {
    let fixture = Fixture::new();
    let host = RecordingHost::default();

    let error = open_project(&fixture.context(), &MemorySettings::default(), &host)
        .await
        .expect_err("bundled script is missing");

    assert!(matches!(error, LaunchError::BundledScriptMissing { .. }));
    assert_eq!(host.progress_started(), 0);
    let errors = host.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("corrupted"));
    assert!(errors[0].contains(
        &bundled_script_path(fixture.extension.path())
            .display()
            .to_string()
    ));
}

#[tokio::test]
async fn unknown_command_id_is_rejected() {
    let fixture = Fixture::new();
    let settings = MemorySettings::default();
    let activation = extension::activate(&settings);
    let host = RecordingHost::default();

    let error = activation
        .execute("openUnity.close", &fixture.context(), &settings, &host)
        .await
        .expect_err("command is not registered");

    assert!(matches!(error, LaunchError::UnknownCommand { .. }));
    assert_eq!(host.progress_started(), 0);
    assert_eq!(host.errors().len(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn successful_script_shows_one_info_notification() {
    let fixture = Fixture::new();
    fixture.write_workspace_script("tools/open.sh", RECORDING_SCRIPT);
    let host = RecordingHost::default();

    let report = open_project(&fixture.context(), &override_settings("tools/open.sh"), &host)
        .await
        .expect("script succeeds");

    assert_eq!(report.outcome.exit_code, Some(0));
    assert_eq!(
        report.script.source,
        ScriptSource::UserOverride(ConfigScope::Workspace)
    );
    assert_eq!(
        host.events(),
        vec![
            HostEvent::ProgressStarted(PROGRESS_TITLE.to_string()),
            HostEvent::ProgressFinished(PROGRESS_TITLE.to_string()),
            HostEvent::Info(SUCCESS_MESSAGE.to_string()),
        ]
    );
}

#[cfg(unix)]
#[tokio::test]
async fn script_receives_workspace_root_as_argument_and_cwd() {
    let fixture = Fixture::new();
    fixture.write_workspace_script("open.sh", RECORDING_SCRIPT);
    let host = RecordingHost::default();

    open_project(&fixture.context(), &override_settings("open.sh"), &host)
        .await
        .expect("script succeeds");

    let argument = fs::read_to_string(fixture.workspace_file("invoked-with.txt"))
        .expect("script recorded its argument");
    let cwd = fs::read_to_string(fixture.workspace_file("invoked-in.txt"))
        .expect("script recorded its cwd");
    assert_eq!(argument.trim_end(), fixture.workspace.path().display().to_string());
    assert_eq!(
        canonical(Path::new(cwd.trim_end())),
        canonical(fixture.workspace.path())
    );
}

#[cfg(unix)]
#[tokio::test]
async fn failing_script_stderr_is_shown_verbatim() {
    let fixture = Fixture::new();
    fixture.write_workspace_script(
        "open.sh",
        "echo 'X: Unity 2022.3.10f1 is not installed' >&2\nexit 3\n",
    );
    let host = RecordingHost::default();

    let error = open_project(&fixture.context(), &override_settings("open.sh"), &host)
        .await
        .expect_err("script fails");

    match error {
        LaunchError::CommandFailed { exit_code, .. } => assert_eq!(exit_code, Some(3)),
        other => panic!("Unexpected error: {other:?}", other = other),
    }
    assert!(host.infos().is_empty());
    assert_eq!(
        host.errors(),
        vec!["Open Unity: X: Unity 2022.3.10f1 is not installed".to_string()]
    );
}

#[cfg(unix)]
#[tokio::test]
async fn silent_failure_falls_back_to_exit_code_message() {
    let fixture = Fixture::new();
    let script = fixture.write_workspace_script("open.sh", "exit 5\n");
    let host = RecordingHost::default();

    open_project(&fixture.context(), &override_settings("open.sh"), &host)
        .await
        .expect_err("script fails");

    let errors = host.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains(&script.display().to_string()));
    assert!(errors[0].ends_with("(exit code 5)"));
}

#[cfg(unix)]
#[tokio::test]
async fn activation_dispatches_open_command() {
    let fixture = Fixture::new();
    fixture.write_workspace_script("open.sh", "exit 0\n");
    let settings = override_settings("open.sh");
    let activation = extension::activate(&settings);
    let host = RecordingHost::default();

    activation
        .execute(OPEN_COMMAND_ID, &fixture.context(), &settings, &host)
        .await
        .expect("open command runs");

    assert_eq!(host.infos(), vec![SUCCESS_MESSAGE.to_string()]);
    assert!(host.errors().is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn overlapping_invocations_run_independently() {
    let fixture = Fixture::new();
    fixture.write_workspace_script("open.sh", "sleep 0.2\n");
    let settings = override_settings("open.sh");
    let context = fixture.context();
    let host = RecordingHost::default();

    let (first, second) = tokio::join!(
        open_project(&context, &settings, &host),
        open_project(&context, &settings, &host)
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(host.progress_started(), 2);
    assert_eq!(host.infos().len(), 2);
}
