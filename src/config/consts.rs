// src/config/consts.rs

// Net config
pub const LEADERBOARD_URL: &str = "https://huggingface.co/spaces/hf-audio/open_asr_leaderboard";

// Selectors (dashboard DOM, not a stable contract)
pub const FRAME_SELECTOR: &str = "iframe";
pub const CONTAINER_SELECTOR: &str = ".svelte-1xyl3gk";
pub const HEADER_SELECTOR: &str = "table thead th";
pub const ROW_SELECTOR: &str = "table tbody tr";
pub const CELL_SELECTOR: &str = "td";

// Waits (seconds / milliseconds)
pub const WAIT_TIMEOUT_SECS: u64 = 30;
pub const PAGE_SETTLE_SECS: u64 = 5;
pub const TABLE_SETTLE_SECS: u64 = 5;
pub const SCROLL_PAUSE_MS: u64 = 500;

// Scroll policy
pub const SCROLL_STEP_PX: f64 = 100.0;
pub const MAX_SCROLLS: usize = 100;
pub const MAX_STALLS: usize = 5;
pub const TARGET_ROWS: usize = 60; // leaderboard size when the scraper was written; unverified

// Browser
pub const WINDOW_W: u32 = 1920;
pub const WINDOW_H: u32 = 1080;

// Files
pub const BACKUP_CSV: &str = "models_benchmarks.csv";
pub const LOG_FILE: &str = "huggingface_leaderboard_log.txt";
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DATASET_STEM: &str = "huggingface_leaderboard";
pub const SUMMARY_STEM: &str = "leaderboard_summary";
pub const DATA_SOURCE: &str = "Hugging Face ASR Leaderboard";
pub const TIMESTAMP_FMT: &str = "%Y%m%d_%H%M%S";
