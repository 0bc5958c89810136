use crate::config::GnockConfig;
use crate::error::GnockError;
use crate::paths;

pub fn run() -> Result<(), GnockError> {
    let path = paths::config_path();
    if path.exists() {
        return Err(GnockError::ConfigAlreadyExists);
    }

    let config = GnockConfig::default();
    config.save(&path)?;
    println!(
        "Created {} (workspace: {})",
        path.display(),
        config.workspace.display()
    );
    Ok(())
}
