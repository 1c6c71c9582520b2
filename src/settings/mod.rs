//! Read-only settings with per-scope origin inspection.
use std::fmt;

pub mod layered;

pub use layered::{LayeredSettings, SettingsFiles};

/// TOML section holding all open-unity settings.
pub const SETTINGS_SECTION: &str = "open_unity";
pub const SCRIPT_PATH_KEY: &str = "open_unity.script_path";
pub const SHOW_IN_STATUS_BAR_KEY: &str = "open_unity.show_in_status_bar";
pub const DEFAULT_SCRIPT_PATH: &str = "scripts/Open-UnityProject.ps1";
pub const DEFAULT_SHOW_IN_STATUS_BAR: bool = true;

/// Scope at which a setting value was written, least specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    Global,
    Workspace,
    WorkspaceFolder,
}

impl ConfigScope {
    /// Most specific scope first.
    pub const PRECEDENCE: [ConfigScope; 3] = [
        ConfigScope::WorkspaceFolder,
        ConfigScope::Workspace,
        ConfigScope::Global,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigScope::Global => "global",
            ConfigScope::Workspace => "workspace",
            ConfigScope::WorkspaceFolder => "workspace_folder",
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A setting's default plus whatever each scope set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection<T> {
    pub key: &'static str,
    pub default_value: T,
    pub global_value: Option<T>,
    pub workspace_value: Option<T>,
    pub workspace_folder_value: Option<T>,
}

impl<T> Inspection<T> {
    pub fn new(key: &'static str, default_value: T) -> Self {
        Self {
            key,
            default_value,
            global_value: None,
            workspace_value: None,
            workspace_folder_value: None,
        }
    }

    pub fn value_at(&self, scope: ConfigScope) -> Option<&T> {
        match scope {
            ConfigScope::Global => self.global_value.as_ref(),
            ConfigScope::Workspace => self.workspace_value.as_ref(),
            ConfigScope::WorkspaceFolder => self.workspace_folder_value.as_ref(),
        }
    }

    pub fn set(&mut self, scope: ConfigScope, value: Option<T>) {
        let slot = match scope {
            ConfigScope::Global => &mut self.global_value,
            ConfigScope::Workspace => &mut self.workspace_value,
            ConfigScope::WorkspaceFolder => &mut self.workspace_folder_value,
        };
        *slot = value;
    }

    pub fn with(mut self, scope: ConfigScope, value: T) -> Self {
        self.set(scope, Some(value));
        self
    }

    /// Most specific scope holding a value, `None` when only the default applies.
    pub fn origin(&self) -> Option<ConfigScope> {
        ConfigScope::PRECEDENCE
            .into_iter()
            .find(|scope| self.value_at(*scope).is_some())
    }

    /// Whether the user wrote this setting anywhere, regardless of its value.
    pub fn is_explicit(&self) -> bool {
        self.origin().is_some()
    }

    pub fn effective(&self) -> &T {
        self.origin()
            .and_then(|scope| self.value_at(scope))
            .unwrap_or(&self.default_value)
    }
}

/// Injected read-only view over the host's settings.
pub trait SettingsProvider {
    fn inspect_script_path(&self) -> Inspection<String>;

    fn inspect_show_in_status_bar(&self) -> Inspection<bool>;

    fn show_in_status_bar(&self) -> bool {
        *self.inspect_show_in_status_bar().effective()
    }
}

/// In-memory settings for embedding hosts that already hold values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySettings {
    pub script_path: Inspection<String>,
    pub show_in_status_bar: Inspection<bool>,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            script_path: Inspection::new(SCRIPT_PATH_KEY, DEFAULT_SCRIPT_PATH.to_string()),
            show_in_status_bar: Inspection::new(
                SHOW_IN_STATUS_BAR_KEY,
                DEFAULT_SHOW_IN_STATUS_BAR,
            ),
        }
    }
}

impl MemorySettings {
    pub fn with_script_path(mut self, scope: ConfigScope, value: impl Into<String>) -> Self {
        self.script_path.set(scope, Some(value.into()));
        self
    }

    pub fn with_show_in_status_bar(mut self, scope: ConfigScope, value: bool) -> Self {
        self.show_in_status_bar.set(scope, Some(value));
        self
    }
}

impl SettingsProvider for MemorySettings {
    fn inspect_script_path(&self) -> Inspection<String> {
        self.script_path.clone()
    }

    fn inspect_show_in_status_bar(&self) -> Inspection<bool> {
        self.show_in_status_bar.clone()
    }
}
