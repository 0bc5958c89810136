use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::GnockError;

/// Mirror `src` into `dst`, keeping relative layout, contents and permission bits.
///
/// Entries are visited sorted by file name. Stops at the first I/O failure and
/// leaves whatever was already written in place.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<(), GnockError> {
    // Directory modes are applied once their contents are written, so a
    // read-only source directory can still be populated at the destination.
    let mut dir_modes = Vec::new();

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(src, e))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| GnockError::FileOp {
                action: "resolve",
                path: entry.path().to_path_buf(),
                source: std::io::Error::other(e),
            })?;
        let dest_path = dst.join(relative);
        let metadata = entry
            .metadata()
            .map_err(|e| walk_error(entry.path(), e))?;

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path)
                .map_err(GnockError::file_op("create directory", &dest_path))?;
            dir_modes.push((dest_path, metadata.permissions()));
        } else {
            copy_file(entry.path(), &dest_path)?;
        }
    }

    for (path, permissions) in dir_modes.into_iter().rev() {
        std::fs::set_permissions(&path, permissions)
            .map_err(GnockError::file_op("set permissions on", &path))?;
    }
    Ok(())
}

fn copy_file(src: &Path, dst: &Path) -> Result<(), GnockError> {
    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent).map_err(GnockError::file_op("create directory", parent))?;
    }
    let data = std::fs::read(src).map_err(GnockError::file_op("read", src))?;
    let permissions = std::fs::metadata(src)
        .map_err(GnockError::file_op("stat", src))?
        .permissions();
    std::fs::write(dst, data).map_err(GnockError::file_op("write", dst))?;
    std::fs::set_permissions(dst, permissions)
        .map_err(GnockError::file_op("set permissions on", dst))?;
    Ok(())
}

fn walk_error(fallback: &Path, err: walkdir::Error) -> GnockError {
    let path: PathBuf = err.path().unwrap_or(fallback).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    GnockError::FileOp {
        action: "walk",
        path,
        source,
    }
}
