use std::path::PathBuf;

use crate::config::GnockConfig;
use crate::error::GnockError;
use crate::installer::list_installed;
use crate::paths;

pub fn run(workspace: Option<PathBuf>) -> Result<(), GnockError> {
    let workspace = match workspace {
        Some(ws) => ws,
        None => GnockConfig::load_or_default(&paths::config_path())?.workspace,
    };
    let examples = paths::examples_dir(&workspace);

    let packages = list_installed(&workspace)?;
    if packages.is_empty() {
        println!("No packages installed in {}.", examples.display());
        return Ok(());
    }

    println!("{}:", examples.display());
    for (module_path, dir) in &packages {
        println!("  {module_path:<40} {}", dir.display());
    }
    Ok(())
}
