use crate::output::{print_json, print_table};
use anyhow::Context;
use roster_core::{config::Config, resolver::resolve};
use std::collections::BTreeMap;
use std::path::Path;

/// Print the whole email-to-targets mapping, for eyeballing the roster after
/// a sheet edit.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let mut loader = super::open_loader(root, &config)?;

    tracing::info!(spreadsheet = %config.sheet.spreadsheet_id, "reading sheet");
    let data = loader.load().context("failed to fetch roster")?;
    let map = resolve(&data.people, &data.teams);

    // Sort at the output edge so the dump is stable run to run.
    let sorted: BTreeMap<&String, &Vec<String>> = map.iter().collect();

    if json {
        return print_json(&sorted);
    }

    if sorted.is_empty() {
        println!("No people in the roster sheet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = sorted
        .iter()
        .map(|(email, channels)| vec![email.to_string(), channels.join(" ")])
        .collect();
    print_table(&["EMAIL", "TARGETS"], rows);
    Ok(())
}
