use crate::error::{Result, RosterError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SheetConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Spreadsheet document id (the long token in the sheet URL).
    pub spreadsheet_id: String,
    #[serde(default = "default_people_range")]
    pub people_range: String,
    #[serde(default = "default_team_range")]
    pub team_range: String,
    /// Values-service base URL. Overridable for tests and mirrors.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_people_range() -> String {
    "People!A2:H".to_string()
}

fn default_team_range() -> String {
    "Teams!A2:B".to_string()
}

fn default_endpoint() -> String {
    "https://sheets.googleapis.com".to_string()
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            people_range: default_people_range(),
            team_range: default_team_range(),
            endpoint: default_endpoint(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub sheet: SheetConfig,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            version: 1,
            sheet: SheetConfig {
                spreadsheet_id: spreadsheet_id.into(),
                ..SheetConfig::default()
            },
        }
    }

    /// Browser URL for the roster sheet, shown in lookup warnings so the
    /// reader knows where to fix the roster.
    pub fn sheet_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}",
            self.sheet.spreadsheet_id
        )
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(RosterError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.sheet.spreadsheet_id.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "sheet.spreadsheet_id is empty".to_string(),
            });
        }

        for (key, range) in [
            ("sheet.people_range", &self.sheet.people_range),
            ("sheet.team_range", &self.sheet.team_range),
        ] {
            if range.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("{key} is empty"),
                });
            } else if !range.contains('!') {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "{key} '{range}' has no sheet qualifier (expected e.g. 'People!A2:H')"
                    ),
                });
            }
        }

        if !self.sheet.endpoint.starts_with("http") {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "sheet.endpoint '{}' does not look like a URL",
                    self.sheet.endpoint
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
