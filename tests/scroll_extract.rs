// tests/scroll_extract.rs
mod common;

use std::time::Duration;

use common::{StuckTable, VirtualTable};
use leaderboard_scrape::{
    config::{ScrapeOptions, ScrollPolicy},
    normalize::build_benchmark,
    progress::Progress,
    scrape::{StopReason, collect_rows, extract_rows},
    specs::leaderboard::BenchmarkInfo,
};

fn policy(target: Option<usize>) -> ScrollPolicy {
    ScrollPolicy {
        step_px: 100.0,
        max_scrolls: 100,
        max_stalls: 5,
        target_rows: target,
        pause: Duration::ZERO,
    }
}

#[test]
fn reads_to_the_bottom_without_duplicates() {
    // 23 rows, 10 visible, 5 rows per step: offsets 0, 5, 10, 13, 13
    let mut view = VirtualTable::new(&["model", "AMI"], 23, 10);
    let out = extract_rows(&mut view, 2, &policy(None), None).unwrap();

    assert_eq!(out.stop, StopReason::BottomReached);
    assert_eq!(out.iterations, 4);
    assert_eq!(out.rows.len(), 23);
    let names: Vec<&str> = out.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names.first(), Some(&"org/model-000"));
    assert_eq!(names.last(), Some(&"org/model-022"));
}

#[test]
fn frozen_scroll_stops_within_k_plus_one_passes() {
    for k in [0usize, 1, 3, 7] {
        let mut view = VirtualTable::new(&["model"], 500, 10);
        view.freeze_after = Some(k);
        let p = ScrollPolicy { max_scrolls: 1_000, ..policy(None) };
        let out = extract_rows(&mut view, 1, &p, None).unwrap();
        assert_eq!(out.stop, StopReason::BottomReached, "k = {k}");
        assert!(out.iterations <= k + 1, "k = {k}: {} passes", out.iterations);
    }
}

#[test]
fn five_empty_passes_end_the_run_short_of_target() {
    let mut view = StuckTable {
        rows: vec![vec![String::from("a/1")], vec![String::from("a/2")], vec![String::from("a/3")]],
        offset: 0.0,
    };
    let out = extract_rows(&mut view, 1, &policy(Some(60)), None).unwrap();

    assert_eq!(out.stop, StopReason::Stalled);
    assert_eq!(out.rows.len(), 3);
    // one productive pass, then five that found nothing
    assert_eq!(out.iterations, 6);
}

#[test]
fn stops_once_target_is_met() {
    let mut view = VirtualTable::new(&["model"], 200, 10);
    let out = extract_rows(&mut view, 1, &policy(Some(60)), None).unwrap();

    assert_eq!(out.stop, StopReason::TargetReached);
    assert_eq!(out.rows.len(), 60);
    assert_eq!(out.iterations, 11);
}

#[test]
fn scroll_budget_caps_passes() {
    let mut view = VirtualTable::new(&["model"], 500, 10);
    let p = ScrollPolicy { max_scrolls: 4, ..policy(None) };
    let out = extract_rows(&mut view, 1, &p, None).unwrap();

    assert_eq!(out.stop, StopReason::ScrollBudget);
    assert_eq!(out.iterations, 4);
    assert_eq!(view.scroll_calls, 4);
}

#[derive(Default)]
struct Recorder {
    expected: Option<Option<usize>>,
    models: Vec<(usize, String)>,
}

impl Progress for Recorder {
    fn begin(&mut self, expected: Option<usize>) {
        self.expected = Some(expected);
    }
    fn item_done(&mut self, count: usize, model: &str) {
        self.models.push((count, model.to_string()));
    }
}

#[test]
fn progress_sees_every_new_row_once() {
    let mut view = VirtualTable::new(&["model"], 12, 10);
    let mut rec = Recorder::default();
    let out = extract_rows(&mut view, 1, &policy(Some(60)), Some(&mut rec)).unwrap();

    assert_eq!(rec.expected, Some(Some(60)));
    assert_eq!(rec.models.len(), out.rows.len());
    assert_eq!(rec.models.last().map(|(n, _)| *n), Some(12));
}

#[test]
fn collected_rows_normalize_with_live_headers() {
    let headers = ["model", "Average WER \u{2B07}\u{FE0F}", "AMI"];
    let mut view = VirtualTable::new(&headers, 15, 10);
    let opts = ScrapeOptions { scroll: policy(None), ..ScrapeOptions::default() };

    let rows = collect_rows(&mut view, &opts, None).unwrap();
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[2].get("AMI"), Some("2.2"));

    let bench = build_benchmark(&rows, BenchmarkInfo::default());
    assert_eq!(bench.results.len(), 15);
    let third = &bench.results[2];
    assert_eq!(third.rank, 3);
    assert_eq!(third.model_name, "org/model-002");
    assert_eq!(third.metrics[0].metric_type, "Average WER");
    assert_eq!(third.metrics[0].value, 2.1);
    assert_eq!(third.metrics[1].dataset_split, "ami");
}

#[test]
fn unreadable_header_row_uses_fallback() {
    let opts = ScrapeOptions { scroll: policy(None), ..ScrapeOptions::default() };
    let width = opts.fallback_headers.len();

    let mut view = VirtualTable::new(&vec!["x"; width], 3, 10);
    view.headers = None;

    let rows = collect_rows(&mut view, &opts, None).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("model"), Some("org/model-000"));
    assert_eq!(rows[0].get("Tedlium"), Some("0.10"));
}
