use anyhow::Context;
use roster_core::{config::Config, io, lookup::lookup_email, resolver::resolve};
use std::path::Path;

pub fn run(root: &Path, email: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let mut loader = super::open_loader(root, &config)?;

    tracing::info!(spreadsheet = %config.sheet.spreadsheet_id, "reading sheet");
    let data = loader.load().context("failed to fetch roster")?;
    let map = resolve(&data.people, &data.teams);
    let result = lookup_email(&map, email, &config.sheet_url());

    // The single-line JSON object on stdout is the contract with downstream
    // notification tooling; --json changes nothing here.
    let json = serde_json::to_string(&result)?;
    println!("{json}");

    if let Some(path) = output {
        io::atomic_write(path, json.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
