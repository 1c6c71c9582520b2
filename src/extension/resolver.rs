//! Launch-script resolution: user override first, bundled script otherwise.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    lib::errors::LaunchError,
    settings::{ConfigScope, SettingsProvider, DEFAULT_SCRIPT_PATH},
};

/// Where the resolved script came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSource {
    /// Explicitly configured at the given scope.
    UserOverride(ConfigScope),
    Bundled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScript {
    pub path: PathBuf,
    pub source: ScriptSource,
}

/// Location of the script shipped inside the installation directory.
pub fn bundled_script_path(extension_dir: &Path) -> PathBuf {
    extension_dir.join(DEFAULT_SCRIPT_PATH)
}

/// Pick the script for this invocation and check that it exists.
///
/// A user override is detected by origin, so a value equal to the default (or
/// empty) still resolves against the workspace root.
pub fn resolve_script<S>(
    workspace_root: &Path,
    extension_dir: &Path,
    settings: &S,
) -> Result<ResolvedScript, LaunchError>
where
    S: SettingsProvider + ?Sized,
{
    let inspection = settings.inspect_script_path();

    let resolved = match inspection.origin() {
        Some(scope) => {
            let path = workspace_root.join(inspection.effective());
            if !path.is_file() {
                return Err(LaunchError::CustomScriptNotFound { path });
            }
            ResolvedScript {
                path,
                source: ScriptSource::UserOverride(scope),
            }
        }
        None => {
            let path = bundled_script_path(extension_dir);
            if !path.is_file() {
                return Err(LaunchError::BundledScriptMissing { path });
            }
            ResolvedScript {
                path,
                source: ScriptSource::Bundled,
            }
        }
    };

    debug!(
        target: "open_unity::resolver",
        path = %resolved.path.display(),
        source = ?resolved.source,
        "Resolved launch script"
    );
    Ok(resolved)
}
