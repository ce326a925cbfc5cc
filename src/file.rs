// src/file.rs
//
// Persistence writer: full JSON dump, run summary, flattened CSV.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::config::consts::TIMESTAMP_FMT;
use crate::config::options::ExportOptions;
use crate::csv::{SEP, to_csv_string};
use crate::error::Result;
use crate::model::{Benchmark, RunSummary};

/// Columns every flattened row starts with.
pub const CSV_BASE_COLUMNS: &[&str] =
    &["benchmark_name", "model_name", "rank", "code_link", "submission_date"];

/// Paths produced by one `write_outputs` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFiles {
    pub json: PathBuf,
    pub summary: PathBuf,
    /// `None` when there was nothing to flatten.
    pub csv: Option<PathBuf>,
}

/// `YYYYMMDD_HHMMSS`
pub fn file_stamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FMT).to_string()
}

/// Local time, ISO-8601 with microseconds and no offset.
pub fn iso_stamp(at: &DateTime<Local>) -> String {
    at.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Write all three outputs for one run, stamped with `at`.
pub fn write_outputs(
    benchmarks: &[Benchmark],
    export: &ExportOptions,
    at: &DateTime<Local>,
) -> Result<WrittenFiles> {
    ensure_directory(&export.out_dir)?;
    let stamp = file_stamp(at);

    let json = export.dataset_json(&stamp);
    write_json(&json, benchmarks)?;

    let summary = export.summary_json(&stamp);
    write_json(&summary, &RunSummary::of(benchmarks, iso_stamp(at), &export.data_source))?;

    let csv = if benchmarks.is_empty() {
        None
    } else {
        let path = export.dataset_csv(&stamp);
        let (headers, rows) = flatten(benchmarks);
        fs::write(&path, to_csv_string(&headers, &rows, SEP))?;
        info!("CSV written to {}", path.display());
        Some(path)
    };

    Ok(WrittenFiles { json, summary, csv })
}

/// Pretty JSON, two-space indent, UTF-8 as-is.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.flush()?;
    Ok(())
}

pub fn read_benchmarks(path: &Path) -> Result<Vec<Benchmark>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// One row per result. Metric columns are the union of `{type}_{split}` keys in
/// order of first appearance; a result without a given metric leaves it blank.
pub fn flatten(benchmarks: &[Benchmark]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut metric_cols: Vec<String> = Vec::new();
    for m in benchmarks.iter().flat_map(|b| &b.results).flat_map(|r| &r.metrics) {
        let key = m.column_key();
        if !metric_cols.contains(&key) {
            metric_cols.push(key);
        }
    }

    let mut headers: Vec<String> = CSV_BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    headers.extend(metric_cols.iter().cloned());

    let mut rows = Vec::new();
    for b in benchmarks {
        for r in &b.results {
            let mut row = vec![
                b.benchmark_name.clone(),
                r.model_name.clone(),
                r.rank.to_string(),
                r.code_link.clone(),
                r.submission_date.clone(),
            ];
            row.extend(metric_cols.iter().map(|col| {
                // last one wins if a result repeats a key
                r.metrics.iter()
                    .rev()
                    .find(|m| m.column_key() == *col)
                    .map(|m| format!("{:?}", m.value))
                    .unwrap_or_default()
            }));
            rows.push(row);
        }
    }
    (headers, rows)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
