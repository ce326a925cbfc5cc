// src/error.rs
use std::{fmt::Display, io, path::PathBuf, time::Duration};

use thiserror::Error;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Anything the CDP driver reports (launch, navigation, JS evaluation).
    #[error("browser: {0}")]
    Browser(String),

    #[error("element `{selector}` did not appear within {timeout:?}")]
    Timeout { selector: String, timeout: Duration },

    #[error("{0}")]
    Missing(String),

    #[error("backup file not found: {}", .0.display())]
    BackupMissing(PathBuf),

    #[error("{0}")]
    Usage(String),

    #[error("config line {line}: {msg}")]
    Config { line: usize, msg: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn browser(e: impl Display) -> Self {
        ScrapeError::Browser(e.to_string())
    }

    pub fn missing(what: impl Into<String>) -> Self {
        ScrapeError::Missing(what.into())
    }
}
