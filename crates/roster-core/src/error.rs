use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("not initialized: run 'roster init'")]
    NotInitialized,

    #[error("missing credentials file {}: create it with a single 'api_key' entry", .0.display())]
    MissingCredentials(PathBuf),

    #[error("sheet fetch failed with status {status}: {body}")]
    Fetch { status: u16, body: String },

    #[error("expected {expected} value ranges from the sheet service, got {got}")]
    RangeCount { expected: usize, got: usize },

    #[error("{table} row {row}: expected at least {min} columns, got {got}")]
    ShortRow {
        table: &'static str,
        row: usize,
        min: usize,
        got: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
