use std::path::Path;

use crate::error::GnockError;
use crate::installer::copy_tree;

use super::RepositoryFetcher;

/// Treats the URL as a directory on this machine and mirrors it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFetcher;

impl RepositoryFetcher for LocalFetcher {
    fn fetch(&self, url: &str, dest_dir: &Path) -> Result<(), GnockError> {
        let src = Path::new(url);
        if !src.is_dir() {
            return Err(GnockError::retrieval(url, "not a local directory"));
        }
        copy_tree(src, dest_dir).map_err(|e| GnockError::retrieval(url, e.to_string()))
    }
}
