use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::GnockError;

/// File name that marks a directory as a package root.
pub const GNO_MOD_FILENAME: &str = "gno.mod";

const MODULE_KEYWORD: &str = "module";

/// Identity of one package as declared by its `gno.mod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Slash-delimited module path, e.g. `gno.land/p/demo/avl`.
    pub path: String,
}

impl ModuleDescriptor {
    /// Slash-separated segments of the module path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/')
    }
}

/// Parse the `gno.mod` file at `path`.
///
/// Only the first line starting with `module` is looked at; everything else,
/// including the `require (...)` block, is ignored. Read failures are returned
/// as [`GnockError::Io`] unchanged.
pub fn parse(path: &Path) -> Result<ModuleDescriptor, GnockError> {
    let file = File::open(path)?;
    parse_lines(BufReader::new(file), path)
}

/// Parse manifest text already held in memory. `origin` is only used for errors.
pub fn parse_str(content: &str, origin: &Path) -> Result<ModuleDescriptor, GnockError> {
    parse_lines(content.as_bytes(), origin)
}

fn parse_lines<R: BufRead>(reader: R, origin: &Path) -> Result<ModuleDescriptor, GnockError> {
    // Lines are matched as bytes; only the declaration itself has to be UTF-8.
    for line in reader.split(b'\n') {
        let line = line?;
        let line = line.trim_ascii();
        if !line.starts_with(MODULE_KEYWORD.as_bytes()) {
            continue;
        }

        let line = std::str::from_utf8(line).map_err(|_| {
            GnockError::InvalidDeclaration(String::from_utf8_lossy(line).into_owned())
        })?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(GnockError::InvalidDeclaration(line.to_string()));
        }
        return Ok(ModuleDescriptor {
            path: parts[1].to_string(),
        });
    }

    Err(GnockError::DeclarationNotFound(origin.to_path_buf()))
}
