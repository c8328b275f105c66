use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub git_commit_emails: Vec<String>,
    pub team: String,
    pub slack_username: Option<String>,
    pub notify_me: bool,
    pub notify_team: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub slack_channel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterData {
    pub people: Vec<Person>,
    pub teams: Vec<Team>,
}

// ---------------------------------------------------------------------------
// Row parsing
//
// Rows arrive as positional string cells from the sheet service. The service
// drops trailing empty cells, so only the leading identity columns are
// required; optional columns degrade to None/false.
// ---------------------------------------------------------------------------

const NAME_COL: usize = 0;
const EMAILS_COL: usize = 1;
const TEAM_COL: usize = 2;
const USERNAME_COL: usize = 3;
// Columns 4-5 hold sheet-only bookkeeping and are ignored.
const NOTIFY_ME_COL: usize = 6;
const NOTIFY_TEAM_COL: usize = 7;

const PERSON_MIN_COLS: usize = TEAM_COL + 1;
const TEAM_MIN_COLS: usize = 1;

/// Loose boolean coercion used by the roster sheet's flag columns.
/// Exactly "yes", "y", or "true" (any case) mean true; anything else,
/// including a missing cell, is false.
pub fn parse_flag(cell: &str) -> bool {
    matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true"
    )
}

/// Split a comma-joined email cell into trimmed entries, dropping empties.
pub fn split_emails(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trimmed cell content at `col`, or None when the cell is absent or blank.
fn cell(row: &[String], col: usize) -> Option<&str> {
    row.get(col).map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl Person {
    /// Parse one people-sheet row. `index` is the zero-based position within
    /// the fetched range, reported one-based in errors.
    pub fn from_row(index: usize, row: &[String]) -> Result<Self> {
        if row.len() < PERSON_MIN_COLS {
            return Err(RosterError::ShortRow {
                table: "people",
                row: index + 1,
                min: PERSON_MIN_COLS,
                got: row.len(),
            });
        }
        Ok(Self {
            name: cell(row, NAME_COL).unwrap_or_default().to_string(),
            git_commit_emails: split_emails(row[EMAILS_COL].as_str()),
            team: cell(row, TEAM_COL).unwrap_or_default().to_string(),
            slack_username: cell(row, USERNAME_COL).map(str::to_string),
            notify_me: cell(row, NOTIFY_ME_COL).map(parse_flag).unwrap_or(false),
            notify_team: cell(row, NOTIFY_TEAM_COL).map(parse_flag).unwrap_or(false),
        })
    }
}

impl Team {
    pub fn from_row(index: usize, row: &[String]) -> Result<Self> {
        if row.len() < TEAM_MIN_COLS {
            return Err(RosterError::ShortRow {
                table: "teams",
                row: index + 1,
                min: TEAM_MIN_COLS,
                got: row.len(),
            });
        }
        Ok(Self {
            name: cell(row, NAME_COL).unwrap_or_default().to_string(),
            slack_channel: cell(row, 1).map(str::to_string),
        })
    }
}

impl RosterData {
    /// Convert the two raw row tables into typed records, failing fast on the
    /// first malformed row.
    pub fn from_rows(people_rows: &[Vec<String>], team_rows: &[Vec<String>]) -> Result<Self> {
        let people = people_rows
            .iter()
            .enumerate()
            .map(|(i, row)| Person::from_row(i, row))
            .collect::<Result<Vec<_>>>()?;
        let teams = team_rows
            .iter()
            .enumerate()
            .map(|(i, row)| Team::from_row(i, row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { people, teams })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
