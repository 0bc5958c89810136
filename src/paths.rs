use std::path::{Path, PathBuf};

use crate::error::GnockError;

/// Workspace root used when neither gnock.json nor `--workspace` names one.
pub const DEFAULT_WORKSPACE: &str = "gno";

/// Path to gnock.json in the current directory
pub fn config_path() -> PathBuf {
    PathBuf::from("gnock.json")
}

/// Directory packages are installed under: {workspace}/examples/
pub fn examples_dir(workspace: &Path) -> PathBuf {
    workspace.join("examples")
}

/// Install destination for a module: {workspace}/examples/{module/path/segments}/
///
/// Rejects paths whose segments are empty, `.` or `..`, which would land
/// outside the examples directory or collapse onto a parent package.
pub fn install_dir(workspace: &Path, module_path: &str) -> Result<PathBuf, GnockError> {
    let mut dest = examples_dir(workspace);
    for segment in module_path.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            return Err(GnockError::UnsafeModulePath(module_path.to_string()));
        }
        dest.push(segment);
    }
    Ok(dest)
}
