//! Shared helpers reused across modules (e.g., path validation).

use std::{
    io,
    path::{Path, PathBuf},
};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Anchor a relative path on `base`; absolute paths pass through.
pub fn absolutize_from(path: PathBuf, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Anchor a relative path on the current directory.
pub fn absolutize(path: PathBuf) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    Ok(absolutize_from(path, &std::env::current_dir()?))
}
