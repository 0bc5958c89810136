use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::GnockError;

use super::RepositoryFetcher;

const GITHUB_HOST: &str = "github.com";

/// Downloads the HEAD tarball of a GitHub repository and unpacks it.
///
/// The archive keeps GitHub's `owner-repo-sha/` top-level directory; manifest
/// discovery is recursive, so it is left in place.
#[derive(Debug, Clone)]
pub struct TarballFetcher {
    api_base: String,
}

impl Default for TarballFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TarballFetcher {
    pub fn new() -> Self {
        Self::with_api_base("https://api.github.com")
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Tarball URL for "github.com/owner/repo[/...]", or None for other hosts.
    pub fn tarball_url(&self, url: &str) -> Option<String> {
        let trimmed = url
            .split_once("://")
            .map_or(url, |(_, rest)| rest)
            .trim_end_matches('/');
        let mut parts = trimmed.split('/');
        let host = parts.next()?;
        let owner = parts.next().filter(|s| !s.is_empty())?;
        let repo = parts.next().filter(|s| !s.is_empty())?;
        if host != GITHUB_HOST {
            return None;
        }
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        Some(format!("{}/repos/{owner}/{repo}/tarball/HEAD", self.api_base))
    }
}

impl RepositoryFetcher for TarballFetcher {
    fn fetch(&self, url: &str, dest_dir: &Path) -> Result<(), GnockError> {
        let tarball_url = self.tarball_url(url).ok_or_else(|| {
            GnockError::retrieval(url, "tarball fetcher only supports github.com repositories")
        })?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("gnock/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let response = client
            .get(&tarball_url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| GnockError::retrieval(url, e.to_string()))?;
        let bytes = response
            .bytes()
            .map_err(|e| GnockError::retrieval(url, e.to_string()))?;

        let integrity = format!("sha256-{}", hex::encode(Sha256::digest(&bytes)));
        tracing::info!(%url, %integrity, size = bytes.len(), "downloaded tarball");

        let decoder = flate2::read::GzDecoder::new(&bytes[..]);
        let mut archive = tar::Archive::new(decoder);
        archive
            .unpack(dest_dir)
            .map_err(|e| GnockError::retrieval(url, format!("failed to unpack tarball: {e}")))?;
        Ok(())
    }
}
