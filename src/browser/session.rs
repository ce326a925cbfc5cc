// src/browser/session.rs
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    thread,
    time::Duration,
};

use chrono::Local;
use headless_chrome::{
    Browser, LaunchOptions, LaunchOptionsBuilder, Tab, protocol::cdp::Page::CaptureScreenshotFormatOption,
};
use tracing::{debug, info, warn};

use crate::config::options::BrowserOptions;
use crate::error::{Result, ScrapeError};
use crate::file::{ensure_directory, file_stamp};

/// Extra Chromium switches on top of the driver's defaults.
const LAUNCH_ARGS: &[&str] = &[
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--disable-infobars",
    "--disable-blink-features=AutomationControlled",
];

/// Driver defaults we strip; `--enable-automation` shows the automation infobar
/// and sets `navigator.webdriver`.
const IGNORED_DEFAULT_ARGS: &[&str] = &["--enable-automation"];

/// Launch settings for `opts`, switches included.
pub fn launch_options(opts: &BrowserOptions) -> Result<LaunchOptions<'static>> {
    LaunchOptionsBuilder::default()
        .headless(opts.headless)
        .sandbox(opts.sandbox)
        .window_size(Some(opts.window))
        .path(opts.chrome_path.clone())
        .args(LAUNCH_ARGS.iter().map(OsStr::new).collect())
        .ignore_default_args(IGNORED_DEFAULT_ARGS.iter().map(OsStr::new).collect())
        .build()
        .map_err(ScrapeError::browser)
}

/// One headless Chromium plus its working tab. The process goes away when
/// this is dropped, whichever way the caller leaves.
pub struct Session {
    tab: Arc<Tab>,
    browser: Browser,
}

impl Session {
    pub fn launch(opts: &BrowserOptions) -> Result<Self> {
        let launch = launch_options(opts)?;

        info!("Launching browser (headless={}, window={}x{})", opts.headless, opts.window.0, opts.window.1);
        let browser = Browser::new(launch).map_err(ScrapeError::browser)?;
        let tab = browser.new_tab().map_err(ScrapeError::browser)?;
        Ok(Self { tab, browser })
    }

    /// Navigate the top-level tab and give the page `settle` to hydrate.
    pub fn open(&self, url: &str, settle: Duration) -> Result<()> {
        info!("Opening {url}");
        self.tab.navigate_to(url).map_err(ScrapeError::browser)?;
        self.tab.wait_until_navigated().map_err(ScrapeError::browser)?;
        thread::sleep(settle);
        Ok(())
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }

    pub(crate) fn new_tab(&self) -> Result<Arc<Tab>> {
        self.browser.new_tab().map_err(ScrapeError::browser)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(false) {
            debug!("closing main tab: {e}");
        }
        info!("Browser session closed");
    }
}

/// Screenshot + raw markup of `tab`, for looking at a failed run offline.
pub fn capture_diagnostics(tab: &Tab, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    ensure_directory(dir)?;
    let stamp = file_stamp(&Local::now());

    let png = tab
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
        .map_err(ScrapeError::browser)?;
    let png_path = dir.join(format!("failure_{stamp}.png"));
    fs::write(&png_path, png)?;

    let html = tab.get_content().map_err(ScrapeError::browser)?;
    let html_path = dir.join(format!("failure_{stamp}.html"));
    fs::write(&html_path, html)?;

    Ok((png_path, html_path))
}

/// Best-effort `capture_diagnostics`; never fails the caller.
pub(crate) fn dump_diagnostics(tab: &Tab, dir: Option<&Path>) {
    let Some(dir) = dir else { return };
    match capture_diagnostics(tab, dir) {
        Ok((png, html)) => info!("Diagnostics saved: {} {}", png.display(), html.display()),
        Err(e) => warn!("Could not save diagnostics: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(list: &[&OsStr], arg: &str) -> bool {
        list.iter().any(|a| *a == OsStr::new(arg))
    }

    #[test]
    fn automation_switch_is_dropped() {
        let launch = launch_options(&BrowserOptions::default()).unwrap();
        assert!(has(&launch.ignore_default_args, "--enable-automation"));
        assert!(has(&launch.args, "--disable-blink-features=AutomationControlled"));
        assert!(!has(&launch.args, "--enable-automation"));
    }

    #[test]
    fn browser_options_carry_through() {
        let opts = BrowserOptions {
            headless: false,
            window: (800, 600),
            chrome_path: Some(PathBuf::from("/opt/chromium/chrome")),
            ..BrowserOptions::default()
        };
        let launch = launch_options(&opts).unwrap();
        assert!(!launch.headless);
        assert_eq!(launch.window_size, Some((800, 600)));
        assert_eq!(launch.path, Some(PathBuf::from("/opt/chromium/chrome")));
    }
}
