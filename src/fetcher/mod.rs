pub mod git;
pub mod local;
pub mod tarball;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GnockError;

pub use git::GitFetcher;
pub use local::LocalFetcher;
pub use tarball::TarballFetcher;

/// Populates a directory with the source tree addressed by a URL.
pub trait RepositoryFetcher {
    /// Retrieve `url` into `dest_dir`, which already exists and is empty.
    fn fetch(&self, url: &str, dest_dir: &Path) -> Result<(), GnockError>;
}

/// Retrieval strategy selectable from gnock.json or `--fetcher`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetcherKind {
    /// `git clone` the repository
    #[default]
    Git,
    /// Download the GitHub tarball of the default branch
    Tarball,
    /// Copy a directory from the local filesystem
    Local,
}

impl FetcherKind {
    /// `git_program` is only used by [`FetcherKind::Git`].
    pub fn build(self, git_program: &str) -> Box<dyn RepositoryFetcher> {
        match self {
            FetcherKind::Git => Box::new(GitFetcher::with_program(git_program)),
            FetcherKind::Tarball => Box::new(TarballFetcher::new()),
            FetcherKind::Local => Box::new(LocalFetcher),
        }
    }
}
