//! Settings layered from per-scope TOML files.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::lib::errors::SettingsError;

use super::{
    ConfigScope, Inspection, SettingsProvider, DEFAULT_SCRIPT_PATH, DEFAULT_SHOW_IN_STATUS_BAR,
    SCRIPT_PATH_KEY, SHOW_IN_STATUS_BAR_KEY,
};

/// Workspace-scope settings file, relative to the workspace root.
pub const WORKSPACE_SETTINGS_FILE: &str = "open-unity.toml";
/// Folder-scope settings file, relative to the workspace root.
pub const WORKSPACE_FOLDER_SETTINGS_FILE: &str = ".open-unity/settings.toml";

/// Location of each scope's settings file. `None` disables the scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsFiles {
    pub global: Option<PathBuf>,
    pub workspace: Option<PathBuf>,
    pub workspace_folder: Option<PathBuf>,
}

impl SettingsFiles {
    /// Standard layout: an optional global file plus two files under the workspace root.
    pub fn for_workspace(global: Option<PathBuf>, workspace_root: Option<&Path>) -> Self {
        Self {
            global,
            workspace: workspace_root.map(|root| root.join(WORKSPACE_SETTINGS_FILE)),
            workspace_folder: workspace_root.map(|root| root.join(WORKSPACE_FOLDER_SETTINGS_FILE)),
        }
    }

    pub fn path_for(&self, scope: ConfigScope) -> Option<&Path> {
        match scope {
            ConfigScope::Global => self.global.as_deref(),
            ConfigScope::Workspace => self.workspace.as_deref(),
            ConfigScope::WorkspaceFolder => self.workspace_folder.as_deref(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSettingsLayer {
    open_unity: Option<RawOpenUnitySection>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOpenUnitySection {
    show_in_status_bar: Option<bool>,
    script_path: Option<String>,
}

/// Settings snapshot read from every configured scope file.
#[derive(Debug, Clone)]
pub struct LayeredSettings {
    script_path: Inspection<String>,
    show_in_status_bar: Inspection<bool>,
    files: SettingsFiles,
}

impl LayeredSettings {
    /// Read every scope file. Missing files count as empty layers.
    pub fn load(files: &SettingsFiles) -> Result<Self, SettingsError> {
        let mut script_path = Inspection::new(SCRIPT_PATH_KEY, DEFAULT_SCRIPT_PATH.to_string());
        let mut show_in_status_bar =
            Inspection::new(SHOW_IN_STATUS_BAR_KEY, DEFAULT_SHOW_IN_STATUS_BAR);

        for scope in [
            ConfigScope::Global,
            ConfigScope::Workspace,
            ConfigScope::WorkspaceFolder,
        ] {
            let Some(path) = files.path_for(scope) else {
                continue;
            };
            let section = load_layer(scope, path)?.open_unity.unwrap_or_default();
            script_path.set(scope, section.script_path);
            show_in_status_bar.set(scope, section.show_in_status_bar);
        }

        info!(
            target: "open_unity::settings",
            script_path_origin = script_path.origin().map(|scope| scope.as_str()).unwrap_or("default"),
            show_in_status_bar = *show_in_status_bar.effective(),
            "Loaded settings"
        );

        Ok(Self {
            script_path,
            show_in_status_bar,
            files: files.clone(),
        })
    }

    pub fn files(&self) -> &SettingsFiles {
        &self.files
    }
}

impl SettingsProvider for LayeredSettings {
    fn inspect_script_path(&self) -> Inspection<String> {
        self.script_path.clone()
    }

    fn inspect_show_in_status_bar(&self) -> Inspection<bool> {
        self.show_in_status_bar.clone()
    }
}

fn load_layer(scope: ConfigScope, path: &Path) -> Result<RawSettingsLayer, SettingsError> {
    debug!(
        target: "open_unity::settings",
        scope = %scope,
        path = %path.display(),
        exists = path.is_file(),
        "Reading settings layer"
    );

    let source = config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
        .required(false);
    let document = config::Config::builder()
        .add_source(source)
        .build()
        .map_err(|err| {
            let error = SettingsError::from_read_error(path.to_path_buf(), err);
            error!(
                target: "open_unity::settings",
                scope = %scope,
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

    document.try_deserialize().map_err(|err| {
        let error = SettingsError::from_parse_error(path.to_path_buf(), err);
        error!(
            target: "open_unity::settings",
            scope = %scope,
            reason = %error,
            "Failed to parse settings file"
        );
        error
    })
}
