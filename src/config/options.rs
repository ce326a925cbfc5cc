// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::specs::leaderboard;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub browser: BrowserOptions,
    pub export: ExportOptions,
    pub log: LogOptions,
    /// CSV consumed when the live path fails (or is skipped).
    pub backup_csv: PathBuf,
    /// Go straight to the backup file; no browser.
    pub skip_live: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            browser: BrowserOptions::default(),
            export: ExportOptions::default(),
            log: LogOptions::default(),
            backup_csv: PathBuf::from(BACKUP_CSV),
            skip_live: false,
        }
    }
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    pub url: String,
    pub frame_selector: String,
    pub container_selector: String,
    pub header_selector: String,
    pub row_selector: String,
    pub cell_selector: String,
    /// Bounded wait for frame / table presence.
    pub wait_timeout: Duration,
    /// Pause after navigation before looking for the frame.
    pub page_settle: Duration,
    /// Pause after the table shows up, before reading it.
    pub table_settle: Duration,
    /// Used when the header row cannot be read or comes back empty.
    pub fallback_headers: Vec<String>,
    pub scroll: ScrollPolicy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(LEADERBOARD_URL),
            frame_selector: s!(FRAME_SELECTOR),
            container_selector: s!(CONTAINER_SELECTOR),
            header_selector: s!(HEADER_SELECTOR),
            row_selector: s!(ROW_SELECTOR),
            cell_selector: s!(CELL_SELECTOR),
            wait_timeout: Duration::from_secs(WAIT_TIMEOUT_SECS),
            page_settle: Duration::from_secs(PAGE_SETTLE_SECS),
            table_settle: Duration::from_secs(TABLE_SETTLE_SECS),
            fallback_headers: leaderboard::fallback_headers(),
            scroll: ScrollPolicy::default(),
        }
    }
}

/// Stop conditions for the scrolling extractor.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollPolicy {
    pub step_px: f64,
    pub max_scrolls: usize,
    /// Consecutive passes without a new row before giving up.
    pub max_stalls: usize,
    /// Stop once this many rows are collected. `None` = read to the bottom.
    pub target_rows: Option<usize>,
    /// Re-render wait after each scroll.
    pub pause: Duration,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            step_px: SCROLL_STEP_PX,
            max_scrolls: MAX_SCROLLS,
            max_stalls: MAX_STALLS,
            target_rows: Some(TARGET_ROWS),
            pause: Duration::from_millis(SCROLL_PAUSE_MS),
        }
    }
}

/* ---------------- Browser ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub headless: bool,
    pub sandbox: bool,
    pub window: (u32, u32),
    /// Chrome/Chromium binary; `None` lets the driver search for one.
    pub chrome_path: Option<PathBuf>,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: false,
            window: (WINDOW_W, WINDOW_H),
            chrome_path: None,
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub dataset_stem: String,
    pub summary_stem: String,
    pub data_source: String,
    /// Where to drop a screenshot + page markup when the live path fails.
    pub diagnostics_dir: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            dataset_stem: s!(DATASET_STEM),
            summary_stem: s!(SUMMARY_STEM),
            data_source: s!(DATA_SOURCE),
            diagnostics_dir: None,
        }
    }
}

impl ExportOptions {
    pub fn dataset_json(&self, stamp: &str) -> PathBuf {
        self.out_dir.join(format!("{}_{}.json", self.dataset_stem, stamp))
    }

    pub fn summary_json(&self, stamp: &str) -> PathBuf {
        self.out_dir.join(format!("{}_{}.json", self.summary_stem, stamp))
    }

    pub fn dataset_csv(&self, stamp: &str) -> PathBuf {
        self.out_dir.join(format!("{}_{}.csv", self.dataset_stem, stamp))
    }
}

/* ---------------- Logging ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    /// Appended to on every run. `None` = stderr only.
    pub file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from(LOG_FILE)),
            default_filter: s!("info"),
        }
    }
}
