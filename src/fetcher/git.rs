use std::path::Path;
use std::process::Command;

use crate::error::GnockError;

use super::RepositoryFetcher;

/// Clones with an external git client.
#[derive(Debug, Clone)]
pub struct GitFetcher {
    program: String,
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::with_program("git")
    }
}

impl GitFetcher {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl RepositoryFetcher for GitFetcher {
    fn fetch(&self, url: &str, dest_dir: &Path) -> Result<(), GnockError> {
        let remote = clone_url(url);
        tracing::debug!(program = %self.program, %remote, dest = %dest_dir.display(), "git clone");

        let output = Command::new(&self.program)
            .arg("clone")
            .arg(&remote)
            .arg(dest_dir)
            .output()
            .map_err(|e| {
                GnockError::retrieval(url, format!("could not run {}: {e}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GnockError::retrieval(
                url,
                format!("git clone failed ({}): {}", output.status, stderr.trim()),
            ));
        }
        Ok(())
    }
}

/// Turn "github.com/owner/repo" into something git can clone.
/// URLs with a scheme, scp-style remotes and local paths pass through unchanged.
pub fn clone_url(url: &str) -> String {
    let is_local = url.starts_with('/') || url.starts_with('.');
    let is_scp = url.contains('@') && url.contains(':');
    if url.contains("://") || is_scp || is_local {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
