// src/store.rs
//
// Backup ingestion: a previously saved leaderboard CSV whose header row names
// the columns. Rows come back as `RawRow`s for the normalizer.

use std::{fs, path::Path};

use tracing::{info, warn};

use crate::csv::{SEP, parse_rows, split_header};
use crate::error::{Result, ScrapeError};
use crate::model::RawRow;

pub fn load_backup_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(ScrapeError::BackupMissing(path.to_path_buf()));
    }

    info!("Reading backup file {}", path.display());
    let text = fs::read_to_string(path)?;
    let rows = rows_from_csv(&text);
    info!("Loaded {} rows from backup", rows.len());
    Ok(rows)
}

/// Header row + data rows → RawRows. Short rows are padded with empty cells,
/// long ones truncated to the header width.
pub fn rows_from_csv(text: &str) -> Vec<RawRow> {
    let Some((headers, body)) = split_header(parse_rows(text, SEP)) else {
        warn!("backup file is empty");
        return Vec::new();
    };
    let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();

    body.into_iter()
        .map(|cells| {
            let width = headers.len();
            let padded = cells.into_iter().chain(std::iter::repeat(s!())).take(width);
            RawRow::zip(&headers, padded)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_squared_off() {
        let rows = rows_from_csv("model,AMI,Tedlium\na/b,1.0\nc/d,2,3,extra\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Tedlium"), Some(""));
        assert_eq!(rows[1].get("Tedlium"), Some("3"));
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(rows_from_csv("").is_empty());
    }

    #[test]
    fn missing_file_is_its_own_error() {
        let err = load_backup_rows(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ScrapeError::BackupMissing(_)));
    }
}
