use std::fmt;

use crate::error::GnockError;
use crate::fetcher::RepositoryFetcher;
use crate::installer::{InstalledPackage, Installer};

/// Minimum `/`-separated segments of a source URL: host, owner, repository.
const MIN_URL_SEGMENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Cloning,
    Installing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Cloning => "cloning",
            Stage::Installing => "installing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Check that `url` has at least host, owner and repository segments.
pub fn validate_url(url: &str) -> Result<(), GnockError> {
    if url.split('/').count() < MIN_URL_SEGMENTS {
        return Err(GnockError::InvalidUrl(url.to_string()));
    }
    Ok(())
}

/// Fetch `url` into a scratch directory and install every package it contains.
///
/// The scratch directory is removed on every exit path. Nothing touches the
/// filesystem when the URL is rejected.
pub fn fetch_and_install<F: RepositoryFetcher + ?Sized>(
    url: &str,
    fetcher: &F,
    installer: &Installer,
) -> Result<Vec<InstalledPackage>, GnockError> {
    fetch_and_install_reporting(url, fetcher, installer, &mut |_| {})
}

/// [`fetch_and_install`], calling `report` as soon as each package lands in
/// the workspace. Packages reported before a failure stay installed.
pub fn fetch_and_install_reporting<F: RepositoryFetcher + ?Sized>(
    url: &str,
    fetcher: &F,
    installer: &Installer,
    report: &mut dyn FnMut(&InstalledPackage),
) -> Result<Vec<InstalledPackage>, GnockError> {
    let result = run_stages(url, fetcher, installer, report);
    if let Err(e) = &result {
        tracing::debug!(stage = %Stage::Failed, %url, error = %e, "fetch stage");
    }
    result
}

fn run_stages<F: RepositoryFetcher + ?Sized>(
    url: &str,
    fetcher: &F,
    installer: &Installer,
    report: &mut dyn FnMut(&InstalledPackage),
) -> Result<Vec<InstalledPackage>, GnockError> {
    enter(Stage::Validating, url);
    validate_url(url)?;

    enter(Stage::Cloning, url);
    let scratch = tempfile::Builder::new()
        .prefix("gnock-")
        .tempdir()
        .map_err(GnockError::file_op(
            "create scratch directory in",
            std::env::temp_dir(),
        ))?;
    fetcher.fetch(url, scratch.path())?;

    enter(Stage::Installing, url);
    let installed = installer.install_reporting(scratch.path(), report)?;

    let scratch_path = scratch.path().to_path_buf();
    scratch
        .close()
        .map_err(GnockError::file_op("remove scratch directory", scratch_path))?;
    enter(Stage::Done, url);
    Ok(installed)
}

fn enter(stage: Stage, url: &str) {
    tracing::debug!(%stage, %url, "fetch stage");
}
