use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use folio_core::{AppConfig, Portfolio};

pub fn run(config_path: &Path, content_path: &Path, force: bool) -> Result<()> {
    write_file(config_path, &AppConfig::default().to_toml()?, force)?;
    write_file(content_path, &Portfolio::default().to_toml()?, force)?;
    Ok(())
}

fn write_file(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("{} already exists (use --force to overwrite)", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}
