// src/model.rs
//
// Canonical shapes. `RawRow` is what the table (or backup CSV) hands us;
// everything else is what ends up on disk.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::specs::leaderboard::BenchmarkInfo;

/// One table row: header label → cell text. Consumed by the normalizer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Pair headers with cells positionally. Extra cells or headers are dropped;
    /// a repeated header keeps the last cell.
    pub fn zip(headers: &[String], cells: impl IntoIterator<Item = String>) -> Self {
        headers.iter().cloned().zip(cells).collect()
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { cells: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "type")]
    pub metric_type: String,
    pub value: f64,
    pub dataset_split: String,
}

impl Metric {
    pub fn new(metric_type: impl Into<String>, value: f64, dataset_split: impl Into<String>) -> Self {
        Self { metric_type: metric_type.into(), value, dataset_split: dataset_split.into() }
    }

    /// Flattened column name: `{type}_{dataset_split}`.
    pub fn column_key(&self) -> String {
        format!("{}_{}", self.metric_type, self.dataset_split)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub model_name: String,
    pub rank: u32,
    pub metrics: Vec<Metric>,
    pub paper_link: String,
    pub code_link: String,
    pub submission_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub benchmark_name: String,
    pub tasks: BTreeSet<String>,
    pub dataset: String,
    pub url: String,
    pub description: String,
    pub source: String,
    pub results: Vec<BenchmarkResult>,
}

impl Benchmark {
    pub fn new(info: BenchmarkInfo) -> Self {
        Self {
            benchmark_name: info.benchmark_name,
            tasks: info.tasks,
            dataset: info.dataset,
            url: info.url,
            description: info.description,
            source: info.source,
            results: Vec::new(),
        }
    }
}

/// Contents of the `{summary}_{timestamp}.json` file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_benchmarks: usize,
    pub total_results: usize,
    pub collection_date: String,
    pub data_source: String,
}

impl RunSummary {
    pub fn of(benchmarks: &[Benchmark], collection_date: String, data_source: &str) -> Self {
        Self {
            total_benchmarks: benchmarks.len(),
            total_results: total_results(benchmarks),
            collection_date,
            data_source: s!(data_source),
        }
    }
}

pub fn total_results(benchmarks: &[Benchmark]) -> usize {
    benchmarks.iter().map(|b| b.results.len()).sum()
}
