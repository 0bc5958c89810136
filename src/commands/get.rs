use std::path::PathBuf;

use crate::config::GnockConfig;
use crate::error::GnockError;
use crate::fetch::fetch_and_install_reporting;
use crate::fetcher::FetcherKind;
use crate::installer::Installer;
use crate::paths;

/// Fetch a repository and install every package it declares.
/// Flags override gnock.json, which overrides the built-in defaults.
pub fn run(
    url: &str,
    workspace: Option<PathBuf>,
    fetcher: Option<FetcherKind>,
) -> Result<(), GnockError> {
    let config = GnockConfig::load_or_default(&paths::config_path())?;
    let workspace = workspace.unwrap_or(config.workspace);
    let kind = fetcher.unwrap_or(config.fetcher);

    println!("Fetching {url}...");
    let installer = Installer::new(workspace);
    let fetcher = kind.build(&config.git);
    let installed =
        fetch_and_install_reporting(url, fetcher.as_ref(), &installer, &mut |pkg| {
            println!("{pkg}");
        })?;

    if installed.is_empty() {
        println!("No gno.mod found in {url}; nothing installed.");
    }
    Ok(())
}
