use crate::config::SheetConfig;
use crate::error::{Result, RosterError};
use crate::paths;
use crate::roster::RosterData;
use crate::sheets::{SheetsClient, ValueRange};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ApiToken
// ---------------------------------------------------------------------------

/// API key for the values service, kept out of config.yaml so the config can
/// be committed while the token stays local.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiToken {
    pub api_key: String,
}

impl ApiToken {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::token_path(root);
        if !path.exists() {
            return Err(RosterError::MissingCredentials(path));
        }
        let data = std::fs::read_to_string(&path)?;
        let token: ApiToken = serde_yaml::from_str(&data)?;
        Ok(token)
    }
}

// ---------------------------------------------------------------------------
// RosterLoader
// ---------------------------------------------------------------------------

/// Fetches and caches the roster for the lifetime of one process invocation.
///
/// Sheet calls are expensive, so the first `load` performs the single batch
/// round trip and every later call serves the cached snapshot until
/// `invalidate` is called. The cache lives on this value; dropping the loader
/// drops the cache.
pub struct RosterLoader {
    client: SheetsClient,
    sheet: SheetConfig,
    cache: Option<RosterData>,
}

impl RosterLoader {
    pub fn new(client: SheetsClient, sheet: SheetConfig) -> Self {
        Self {
            client,
            sheet,
            cache: None,
        }
    }

    /// The roster snapshot, fetching on first use.
    pub fn load(&mut self) -> Result<&RosterData> {
        if self.cache.is_none() {
            let data = self.fetch()?;
            self.cache = Some(data);
        }
        Ok(self.cache.get_or_insert_with(RosterData::default))
    }

    /// Drop the cached snapshot; the next `load` refetches.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    fn fetch(&self) -> Result<RosterData> {
        let ranges = [self.sheet.people_range.as_str(), self.sheet.team_range.as_str()];
        let got = self.client.batch_get(&self.sheet.spreadsheet_id, &ranges)?;
        // Value ranges come back in request order: people, then teams.
        match <[ValueRange; 2]>::try_from(got) {
            Ok([people, teams]) => RosterData::from_rows(&people.values, &teams.values),
            Err(other) => Err(RosterError::RangeCount {
                expected: 2,
                got: other.len(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
