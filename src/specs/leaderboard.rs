// src/specs/leaderboard.rs
//
// Column vocabulary of the Open ASR leaderboard. Header text on the live page
// carries arrow emoji (with one or two U+FE0F selectors), the backup CSV uses
// plain or snake_case names; every spelling seen so far is listed here.

use std::collections::BTreeSet;

use crate::config::consts::LEADERBOARD_URL;

/// Header row used when the live header cells can't be read.
pub const FALLBACK_HEADERS: &[&str] = &[
    "model",
    AVERAGE_WER_DECORATED,
    RTFX_DECORATED,
    "License",
    "AMI",
    "Earnings22",
    "Gigaspeech",
    "LS Clean",
    "LS Other",
    "SPGISpeech",
    "Tedlium",
    "Voxpopuli",
];

const AVERAGE_WER_DECORATED: &str = "Average WER \u{2B07}\u{FE0F}";
const RTFX_DECORATED: &str = "RTFx \u{2B06}\u{FE0F}\u{FE0F}";

/// Model-name column, highest priority first.
pub const MODEL_KEYS: &[&str] = &["model", "model_name", "Model"];

/// A leaderboard-wide metric and every header it has been published under.
pub struct MetricFamily {
    pub metric_type: &'static str,
    pub synonyms: &'static [&'static str],
}

pub const METRIC_FAMILIES: &[MetricFamily] = &[
    MetricFamily {
        metric_type: "Average WER",
        synonyms: &[AVERAGE_WER_DECORATED, "Average WER", "WER", "average_wer"],
    },
    MetricFamily {
        metric_type: "RTFx",
        synonyms: &[RTFX_DECORATED, "RTFx", "rtfx"],
    },
];

/// Split recorded for the leaderboard-wide metrics.
pub const AVERAGE_SPLIT: &str = "average";

/// Per-dataset WER columns. Closed list.
pub const DATASET_COLUMNS: &[&str] = &[
    "AMI",
    "Earnings22",
    "Gigaspeech",
    "LS Clean",
    "LS Other",
    "SPGISpeech",
    "Tedlium",
    "Voxpopuli",
];

pub const DATASET_METRIC: &str = "WER";

/// Model pages live under this prefix as `org/name`.
pub const MODEL_PAGE_PREFIX: &str = "https://huggingface.co/";

/// Descriptive fields of the single benchmark a run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkInfo {
    pub benchmark_name: String,
    pub tasks: BTreeSet<String>,
    pub dataset: String,
    pub url: String,
    pub description: String,
    pub source: String,
}

impl Default for BenchmarkInfo {
    fn default() -> Self {
        Self {
            benchmark_name: s!("Hugging Face ASR Leaderboard"),
            tasks: BTreeSet::from([s!("automatic-speech-recognition")]),
            dataset: s!("Multiple (AMI, Earnings22, GigaSpeech, LibriSpeech, etc.)"),
            url: s!(LEADERBOARD_URL),
            description: s!(
                "Comprehensive benchmark for automatic speech recognition models evaluated on multiple datasets"
            ),
            source: s!("huggingface"),
        }
    }
}

pub fn fallback_headers() -> Vec<String> {
    FALLBACK_HEADERS.iter().map(|h| h.to_string()).collect()
}
