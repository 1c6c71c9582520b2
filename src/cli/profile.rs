//! LaunchProfile and workspace/extension/settings path resolution.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    extension::InvocationContext,
    lib::{errors::SettingsError, paths, shell::Platform},
    settings::SettingsFiles,
};

const WORKSPACE_ENV: &str = "OPEN_UNITY_WORKSPACE";
const EXTENSION_DIR_ENV: &str = "OPEN_UNITY_EXTENSION_DIR";
const SETTINGS_ENV: &str = "OPEN_UNITY_SETTINGS";
const XDG_CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";
const HOME_ENV: &str = "HOME";
const GLOBAL_SETTINGS_DIR: &str = "open-unity";
const GLOBAL_SETTINGS_FILE: &str = "settings.toml";

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub workspace_root: Option<PathBuf>,
    pub extension_dir: PathBuf,
    pub settings_files: SettingsFiles,
    pub platform: Platform,
}

impl LaunchProfile {
    pub fn invocation_context(&self) -> InvocationContext {
        InvocationContext {
            workspace_root: self.workspace_root.clone(),
            extension_dir: self.extension_dir.clone(),
            platform: self.platform,
        }
    }
}

/// Resolve the workspace root in the order: CLI override → env var.
///
/// No value means no workspace is open; relative values are anchored on the current directory.
pub fn resolve_workspace_root(
    override_path: Option<PathBuf>,
) -> Result<Option<PathBuf>, SettingsError> {
    let Some(path) = override_path.or_else(|| non_empty_env(WORKSPACE_ENV).map(PathBuf::from))
    else {
        return Ok(None);
    };
    paths::absolutize(path.clone())
        .map(Some)
        .map_err(|source| SettingsError::InvalidWorkspace { path, source })
}

/// Resolve the installation directory in the order: CLI override → env var → executable dir.
pub fn resolve_extension_dir(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path.or_else(|| non_empty_env(EXTENSION_DIR_ENV).map(PathBuf::from))
    {
        return paths::absolutize(path).context("failed to obtain current directory");
    }

    let executable = env::current_exe().context("failed to locate the running executable")?;
    executable
        .parent()
        .map(Path::to_path_buf)
        .context("executable has no parent directory")
}

/// Resolve the global settings file in the order: CLI override → env var → XDG/HOME default.
pub fn resolve_global_settings_path(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path.or_else(|| {
        resolve_global_settings_path_from(
            non_empty_env(SETTINGS_ENV),
            non_empty_env(XDG_CONFIG_HOME_ENV),
            non_empty_env(HOME_ENV),
        )
    })
}

/// Resolve the global settings file from explicit environment values (testable helper).
fn resolve_global_settings_path_from(
    settings: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    if let Some(settings) = settings {
        return Some(PathBuf::from(settings));
    }
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home.map(|home| PathBuf::from(home).join(".config")))?;
    Some(
        config_dir
            .join(GLOBAL_SETTINGS_DIR)
            .join(GLOBAL_SETTINGS_FILE),
    )
}

fn non_empty_env(key: &str) -> Option<OsString> {
    env::var_os(key).filter(|value| !value.is_empty())
}
