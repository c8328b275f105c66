pub mod config;
pub mod dump;
pub mod init;
pub mod lookup;

use roster_core::{
    config::Config,
    loader::{ApiToken, RosterLoader},
    sheets::SheetsClient,
};
use std::path::Path;

/// Wire a loader from the on-disk config and token. Shared by the commands
/// that touch the sheet service.
fn open_loader(root: &Path, config: &Config) -> anyhow::Result<RosterLoader> {
    let token = ApiToken::load(root)?;
    let client = SheetsClient::new(config.sheet.endpoint.clone(), token.api_key);
    Ok(RosterLoader::new(client, config.sheet.clone()))
}
