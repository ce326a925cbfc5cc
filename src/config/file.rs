// src/config/file.rs
//
// `key = value` config file, one setting per line. Blank lines and `#` comments
// are skipped. Anything not mentioned keeps its default.

use std::{fs, path::{Path, PathBuf}, str::FromStr, time::Duration};

use tracing::warn;

use super::options::AppOptions;
use crate::error::{Result, ScrapeError};

pub fn load(path: &Path) -> Result<AppOptions> {
    let text = fs::read_to_string(path)?;
    let mut opts = AppOptions::default();
    apply(&mut opts, &text)?;
    Ok(opts)
}

/// Overlay settings from `text` onto `opts`.
pub fn apply(opts: &mut AppOptions, text: &str) -> Result<()> {
    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let Some(eq) = line.find('=') else {
            return Err(bad(line_no, format!("expected `key = value`, got `{line}`")));
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();

        let scrape = &mut opts.scrape;
        match key {
            "url"                => scrape.url = s!(val),
            "frame_selector"     => scrape.frame_selector = s!(val),
            "container_selector" => scrape.container_selector = s!(val),
            "header_selector"    => scrape.header_selector = s!(val),
            "row_selector"       => scrape.row_selector = s!(val),
            "cell_selector"      => scrape.cell_selector = s!(val),
            "wait_timeout_secs"  => scrape.wait_timeout = Duration::from_secs(num(line_no, key, val)?),
            "page_settle_secs"   => scrape.page_settle = Duration::from_secs(num(line_no, key, val)?),
            "table_settle_secs"  => scrape.table_settle = Duration::from_secs(num(line_no, key, val)?),
            "fallback_headers"   => {
                let list: Vec<String> = val.split(',')
                    .map(str::trim)
                    .filter(|h| !h.is_empty())
                    .map(String::from)
                    .collect();
                if list.is_empty() {
                    return Err(bad(line_no, "fallback_headers must name at least one column"));
                }
                scrape.fallback_headers = list;
            }

            "scroll_step"     => scrape.scroll.step_px = num(line_no, key, val)?,
            "max_scrolls"     => scrape.scroll.max_scrolls = num(line_no, key, val)?,
            "max_stalls"      => scrape.scroll.max_stalls = num(line_no, key, val)?,
            "scroll_pause_ms" => scrape.scroll.pause = Duration::from_millis(num(line_no, key, val)?),
            "target_rows"     => {
                scrape.scroll.target_rows = if is_none(val) { None } else { Some(num(line_no, key, val)?) };
            }

            "headless"    => opts.browser.headless = flag(line_no, key, val)?,
            "sandbox"     => opts.browser.sandbox = flag(line_no, key, val)?,
            "window"      => opts.browser.window = window(line_no, val)?,
            "chrome_path" => opts.browser.chrome_path = opt_path(val),

            "out_dir"         => opts.export.out_dir = PathBuf::from(val),
            "dataset_stem"    => opts.export.dataset_stem = s!(val),
            "summary_stem"    => opts.export.summary_stem = s!(val),
            "data_source"     => opts.export.data_source = s!(val),
            "diagnostics_dir" => opts.export.diagnostics_dir = opt_path(val),

            "backup_csv" => opts.backup_csv = PathBuf::from(val),
            "skip_live"  => opts.skip_live = flag(line_no, key, val)?,
            "log_file"   => opts.log.file = opt_path(val),
            "log_filter" => opts.log.default_filter = s!(val),

            other => warn!("config line {line_no}: unknown key `{other}` ignored"),
        }
    }
    Ok(())
}

/* ---------- value helpers ---------- */

fn bad(line: usize, msg: impl Into<String>) -> ScrapeError {
    ScrapeError::Config { line, msg: msg.into() }
}

fn num<T: FromStr>(line: usize, key: &str, val: &str) -> Result<T> {
    val.parse().map_err(|_| bad(line, format!("`{key}` expects a number, got `{val}`")))
}

fn flag(line: usize, key: &str, val: &str) -> Result<bool> {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(bad(line, format!("`{key}` expects true/false, got `{val}`"))),
    }
}

fn is_none(val: &str) -> bool {
    val.is_empty() || val.eq_ignore_ascii_case("none")
}

fn opt_path(val: &str) -> Option<PathBuf> {
    if is_none(val) { None } else { Some(PathBuf::from(val)) }
}

/// "1920x1080"
fn window(line: usize, val: &str) -> Result<(u32, u32)> {
    let (w, h) = val
        .split_once(['x', 'X'])
        .ok_or_else(|| bad(line, format!("`window` expects WxH, got `{val}`")))?;
    Ok((num(line, "window", w.trim())?, num(line, "window", h.trim())?))
}
