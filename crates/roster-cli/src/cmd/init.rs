use anyhow::Context;
use roster_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing roster in: {}", root.display());

    let dir = paths::roster_dir(root);
    io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let config_path = paths::config_path(root);
    if !config_path.exists() {
        let cfg = Config::new("");
        cfg.save(root).context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    println!("\nNext steps:");
    println!("  1. Set sheet.spreadsheet_id in {}", paths::CONFIG_FILE);
    println!("  2. Create {} with the values-service key:", paths::TOKEN_FILE);
    println!("       api_key: <your key>");
    Ok(())
}
