// src/normalize.rs
//
// RawRow → BenchmarkResult. Header spellings come from `specs::leaderboard`;
// nothing here knows where the row came from (live table or backup CSV).

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::core::sanitize::{dataset_split, header_key, is_placeholder};
use crate::model::{Benchmark, BenchmarkResult, Metric, RawRow};
use crate::specs::leaderboard::{
    AVERAGE_SPLIT, BenchmarkInfo, DATASET_COLUMNS, DATASET_METRIC, METRIC_FAMILIES, MODEL_KEYS,
    MODEL_PAGE_PREFIX,
};

/// A metric cell before parsing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricCell<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl<'a> From<&'a str> for MetricCell<'a> {
    fn from(s: &'a str) -> Self { MetricCell::Text(s) }
}

impl<'a> From<&'a String> for MetricCell<'a> {
    fn from(s: &'a String) -> Self { MetricCell::Text(s) }
}

impl From<f64> for MetricCell<'_> {
    fn from(v: f64) -> Self { MetricCell::Number(v) }
}

impl<'a, T: Into<MetricCell<'a>>> From<Option<T>> for MetricCell<'a> {
    fn from(v: Option<T>) -> Self { v.map_or(MetricCell::Missing, Into::into) }
}

/// Permissive metric parse. `%` and spaces are stripped; placeholders and
/// anything unparsable become 0.0 (the latter with a warning), so a broken
/// cell reads the same as a genuine zero.
pub fn parse_metric_value<'a>(cell: impl Into<MetricCell<'a>>) -> f64 {
    match cell.into() {
        MetricCell::Missing => 0.0,
        MetricCell::Number(v) if v.is_finite() => v,
        MetricCell::Number(v) => {
            warn!("non-finite metric value {v}; using 0.0");
            0.0
        }
        MetricCell::Text(raw) => {
            let cleaned: String = raw.chars().filter(|&c| c != '%' && c != ' ').collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() || cleaned == "-" || cleaned == "nan" {
                return 0.0;
            }
            match cleaned.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    warn!("could not parse metric value {raw:?}; using 0.0");
                    0.0
                }
            }
        }
    }
}

/// First usable cell among `synonyms`, in priority order. Exact header text
/// wins; failing that, headers are compared with decorations stripped.
pub fn lookup<'r>(row: &'r RawRow, synonyms: &[&str]) -> Option<&'r str> {
    let exact = synonyms.iter()
        .filter_map(|key| row.get(key))
        .find(|cell| !is_placeholder(cell));
    if exact.is_some() {
        return exact;
    }

    for want in synonyms.iter().map(|s| header_key(s)) {
        let hit = row.headers()
            .filter(|h| header_key(h) == want)
            .filter_map(|h| row.get(h).map(|cell| (h, cell)))
            .filter(|(_, cell)| !is_placeholder(cell))
            .min_by_key(|(h, _)| *h);
        if let Some((_, cell)) = hit {
            return Some(cell);
        }
    }
    None
}

fn model_name(row: &RawRow) -> Option<&str> {
    MODEL_KEYS.iter()
        .filter_map(|key| row.get(key))
        .map(str::trim)
        .find(|name| !name.is_empty())
}

/// `org/model` → model page URL; bare names have none.
pub fn model_url(model_name: &str) -> String {
    if model_name.contains('/') {
        format!("{MODEL_PAGE_PREFIX}{model_name}")
    } else {
        s!()
    }
}

/// Shape one row. `None` when no model name can be found; that is a discard,
/// not an error.
pub fn normalize_row(row: &RawRow, rank: u32) -> Option<BenchmarkResult> {
    let model_name = model_name(row)?;

    let mut metrics = Vec::new();
    for family in METRIC_FAMILIES {
        if let Some(cell) = lookup(row, family.synonyms) {
            metrics.push(Metric::new(family.metric_type, parse_metric_value(cell), AVERAGE_SPLIT));
        }
    }
    for &column in DATASET_COLUMNS {
        if let Some(cell) = lookup(row, &[column]) {
            metrics.push(Metric::new(DATASET_METRIC, parse_metric_value(cell), dataset_split(column)));
        }
    }

    Some(BenchmarkResult {
        model_name: s!(model_name),
        rank,
        metrics,
        paper_link: s!(),
        code_link: model_url(model_name),
        submission_date: s!(),
    })
}

/// What happened to one input row.
#[derive(Clone, Debug, PartialEq)]
pub enum RowOutcome {
    Kept(BenchmarkResult),
    NoModel { rank: u32 },
    Duplicate { rank: u32, model_name: String },
}

/// Normalize rows in order. Rank is the 1-based input position, so dropped
/// rows leave gaps. Later repeats of a model name are discarded.
pub fn normalize_rows<I>(rows: I) -> Vec<RowOutcome>
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<RawRow>,
{
    use std::borrow::Borrow;

    let mut seen: HashSet<String> = HashSet::new();
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let rank = i as u32 + 1;
            match normalize_row(row.borrow(), rank) {
                None => RowOutcome::NoModel { rank },
                Some(r) if !seen.insert(r.model_name.clone()) => {
                    RowOutcome::Duplicate { rank, model_name: r.model_name }
                }
                Some(r) => RowOutcome::Kept(r),
            }
        })
        .collect()
}

/// Wrap normalized rows into the run's single `Benchmark`.
pub fn build_benchmark<I>(rows: I, info: BenchmarkInfo) -> Benchmark
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<RawRow>,
{
    let mut benchmark = Benchmark::new(info);
    for outcome in normalize_rows(rows) {
        match outcome {
            RowOutcome::Kept(r) => benchmark.results.push(r),
            RowOutcome::NoModel { rank } => debug!("row {rank}: no model name, skipped"),
            RowOutcome::Duplicate { rank, model_name } => {
                warn!("row {rank}: duplicate model {model_name:?}, skipped")
            }
        }
    }
    benchmark
}
