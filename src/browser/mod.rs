// src/browser/mod.rs
//! Live path: headless Chromium → dashboard → frame → table.

mod frame;
mod session;
mod table;

pub use frame::{FrameContext, resolve_src};
pub use session::{Session, capture_diagnostics, launch_options};
pub use table::BrowserTable;

use tracing::info;

use crate::config::options::AppOptions;
use crate::error::Result;
use crate::model::RawRow;
use crate::progress::Progress;
use crate::scrape::collect_rows;

/// Scrape the leaderboard from the live dashboard. The browser is shut down
/// before this returns, on success or failure. With a diagnostics directory
/// configured, a failure leaves a screenshot and the page markup behind.
pub fn read_leaderboard(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<RawRow>> {
    let scrape = &opts.scrape;
    let diag = opts.export.diagnostics_dir.as_deref();
    let session = Session::launch(&opts.browser)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Opening leaderboard…");
    }
    if let Err(e) = session.open(&scrape.url, scrape.page_settle) {
        session::dump_diagnostics(session.tab(), diag);
        return Err(e);
    }

    let frame = match FrameContext::enter(&session, scrape) {
        Ok(frame) => frame,
        Err(e) => {
            session::dump_diagnostics(session.tab(), diag);
            return Err(e);
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log("Reading table…");
    }
    let rows = BrowserTable::locate(frame.tab(), scrape)
        .and_then(|mut table| collect_rows(&mut table, scrape, progress));

    match &rows {
        Ok(rows) => info!("Live scrape returned {} rows", rows.len()),
        Err(_) => session::dump_diagnostics(frame.tab(), diag),
    }
    rows
}
