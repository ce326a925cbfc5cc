// src/scrape/mod.rs
//! Reading a virtualized table through a `TableView`.
//!
//! The browser-backed view lives in `crate::browser`; tests drive the same
//! code with an in-memory view.

mod headers;
mod scroll;

pub use headers::{clean_labels, extract_headers};
pub use scroll::{Extraction, StopReason, extract_rows};

use tracing::info;

use crate::config::options::ScrapeOptions;
use crate::error::Result;
use crate::model::RawRow;
use crate::progress::Progress;

/// Cell texts of one rendered row, or why it couldn't be read.
pub type RowRead = Result<Vec<String>>;

/// A scrollable table whose body only renders the rows near the viewport.
pub trait TableView {
    /// Header cell texts, as rendered.
    fn header_labels(&mut self) -> Result<Vec<String>>;

    /// Every body row currently in the DOM. A failure reading one row is
    /// reported in its slot; a failure listing rows at all is the outer error.
    fn rendered_rows(&mut self) -> Result<Vec<RowRead>>;

    /// Current scroll offset of the container, in pixels.
    fn scroll_position(&mut self) -> Result<f64>;

    /// Scroll the container forward by `px`.
    fn scroll_by(&mut self, px: f64) -> Result<()>;
}

/// Headers, then every unique row, paired up as `RawRow`s.
pub fn collect_rows<V: TableView + ?Sized>(
    view: &mut V,
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<RawRow>> {
    let headers = extract_headers(view, &opts.fallback_headers);
    let extraction = extract_rows(view, headers.len(), &opts.scroll, progress)?;
    info!(
        "Extraction stopped ({:?}) after {} passes with {} rows",
        extraction.stop,
        extraction.iterations,
        extraction.rows.len()
    );
    Ok(extraction.rows.into_iter().map(|cells| RawRow::zip(&headers, cells)).collect())
}
