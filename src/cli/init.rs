//! Init command implementation

use std::path::Path;

use anyhow::{Result, bail};

use kudos::config::Config;

/// Write a default configuration file
pub async fn init_command(data_dir: &Path, force: bool) -> Result<()> {
    let path = Config::config_path_in(data_dir);
    if path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to_file(&path)?;
    println!("Created: {}", path.display());
    Ok(())
}
