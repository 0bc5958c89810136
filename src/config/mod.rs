use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GnockError;
use crate::fetcher::FetcherKind;
use crate::paths;

fn default_workspace() -> PathBuf {
    PathBuf::from(paths::DEFAULT_WORKSPACE)
}

fn default_git() -> String {
    "git".to_string()
}

/// Contents of gnock.json. Every field is optional on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnockConfig {
    /// Root of the local gno checkout; packages land in `{workspace}/examples/`.
    #[serde(default = "default_workspace")]
    pub workspace: PathBuf,

    #[serde(default)]
    pub fetcher: FetcherKind,

    /// git executable used by the git fetcher
    #[serde(default = "default_git")]
    pub git: String,
}

impl Default for GnockConfig {
    fn default() -> Self {
        Self {
            workspace: default_workspace(),
            fetcher: FetcherKind::default(),
            git: default_git(),
        }
    }
}

impl GnockConfig {
    pub fn load(path: &Path) -> Result<Self, GnockError> {
        let content =
            std::fs::read_to_string(path).map_err(GnockError::file_op("read", path))?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Defaults when the file is absent. A file that exists but fails to
    /// parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, GnockError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), GnockError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content + "\n").map_err(GnockError::file_op("write", path))?;
        Ok(())
    }
}
