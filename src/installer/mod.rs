pub mod copy;

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::GnockError;
use crate::manifest::{self, GNO_MOD_FILENAME};
use crate::paths;

pub use copy::copy_tree;

/// One package materialized in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub module_path: String,
    /// Package root relative to the fetched tree ("" for the tree root).
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl fmt::Display for InstalledPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Package {} installed successfully to {}",
            self.module_path,
            self.destination.display()
        )
    }
}

/// Installs every package found in a fetched tree into `{workspace}/examples/`.
#[derive(Debug, Clone)]
pub struct Installer {
    workspace: PathBuf,
}

impl Installer {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Scan `root` depth-first and install each directory holding a gno.mod.
    ///
    /// Nested package roots are installed on their own, independently of the
    /// package that contains them. The first failure aborts the whole run;
    /// packages installed before it stay on disk.
    pub fn install(&self, root: &Path) -> Result<Vec<InstalledPackage>, GnockError> {
        self.install_reporting(root, &mut |_| {})
    }

    /// Like [`Installer::install`], calling `report` right after each package
    /// is copied, before the next entry is visited.
    pub fn install_reporting(
        &self,
        root: &Path,
        report: &mut dyn FnMut(&InstalledPackage),
    ) -> Result<Vec<InstalledPackage>, GnockError> {
        self.visit(root, Path::new(""), report)
    }

    fn visit(
        &self,
        dir: &Path,
        rel_path: &Path,
        report: &mut dyn FnMut(&InstalledPackage),
    ) -> Result<Vec<InstalledPackage>, GnockError> {
        let mut entries = std::fs::read_dir(dir)
            .map_err(GnockError::file_op("read directory", dir))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(GnockError::file_op("read directory", dir))?;
        entries.sort_by_key(|e| e.file_name());

        let mut installed = Vec::new();
        for entry in entries {
            let name = entry.file_name();
            let file_type = entry
                .file_type()
                .map_err(GnockError::file_op("stat", entry.path()))?;

            let node = if file_type.is_dir() {
                self.visit(&entry.path(), &rel_path.join(&name), report)
            } else if name == GNO_MOD_FILENAME {
                self.install_package(dir, rel_path).map(|pkg| {
                    report(&pkg);
                    vec![pkg]
                })
            } else {
                Ok(Vec::new())
            };
            installed.extend(node?);
        }
        Ok(installed)
    }

    fn install_package(
        &self,
        pkg_dir: &Path,
        rel_path: &Path,
    ) -> Result<InstalledPackage, GnockError> {
        let module = manifest::parse(&pkg_dir.join(GNO_MOD_FILENAME)).map_err(|e| {
            GnockError::InvalidManifest {
                rel_path: rel_path.to_path_buf(),
                source: Box::new(e),
            }
        })?;

        let destination = paths::install_dir(&self.workspace, &module.path)?;
        std::fs::create_dir_all(&destination)
            .map_err(GnockError::file_op("create directory", &destination))?;
        copy_tree(pkg_dir, &destination)?;

        tracing::info!(
            module = %module.path,
            destination = %destination.display(),
            "package installed"
        );
        Ok(InstalledPackage {
            module_path: module.path,
            source: rel_path.to_path_buf(),
            destination,
        })
    }
}

/// Every package currently installed under `{workspace}/examples/`, sorted by module path.
///
/// A gno.mod below another package root is part of that package's copy, not
/// a separate install, so it is not listed. A gno.mod that no longer parses is
/// skipped with a warning rather than failing the listing.
pub fn list_installed(workspace: &Path) -> Result<Vec<(String, PathBuf)>, GnockError> {
    let examples = paths::examples_dir(workspace);
    if !examples.is_dir() {
        return Ok(Vec::new());
    }

    let mut roots = BTreeSet::new();
    for entry in WalkDir::new(&examples).sort_by_file_name() {
        let entry = entry.map_err(|e| GnockError::FileOp {
            action: "walk",
            path: examples.clone(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected")),
        })?;
        if !entry.file_type().is_file() || entry.file_name() != GNO_MOD_FILENAME {
            continue;
        }
        if let Some(pkg_dir) = entry.path().parent() {
            roots.insert(pkg_dir.to_path_buf());
        }
    }

    let mut packages = Vec::new();
    for pkg_dir in &roots {
        if pkg_dir.ancestors().skip(1).any(|a| roots.contains(a)) {
            continue;
        }
        let manifest_path = pkg_dir.join(GNO_MOD_FILENAME);
        match manifest::parse(&manifest_path) {
            Ok(module) => packages.push((module.path, pkg_dir.clone())),
            Err(e) => tracing::warn!(path = %manifest_path.display(), "skipping gno.mod: {e}"),
        }
    }
    packages.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(packages)
}
