// src/browser/table.rs
use std::thread;

use headless_chrome::{Element, Tab};
use serde_json::json;
use tracing::{debug, info};

use crate::config::options::ScrapeOptions;
use crate::error::{Result, ScrapeError};
use crate::scrape::{RowRead, TableView};

const SCROLL_TOP_JS: &str = "function() { return this.scrollTop; }";
const SCROLL_BY_JS: &str = "function(step) { this.scrollTop = this.scrollTop + step; }";

/// The leaderboard table inside the frame tab. The container is the element
/// that actually scrolls; rows and headers are queried tab-wide.
pub struct BrowserTable<'a> {
    tab: &'a Tab,
    container: Element<'a>,
    opts: &'a ScrapeOptions,
}

impl<'a> BrowserTable<'a> {
    /// Wait for the scroll container, then let the first rows render.
    pub fn locate(tab: &'a Tab, opts: &'a ScrapeOptions) -> Result<Self> {
        info!("Waiting for table `{}`", opts.container_selector);
        let container = tab
            .wait_for_element_with_custom_timeout(&opts.container_selector, opts.wait_timeout)
            .map_err(|e| {
                debug!("table wait: {e}");
                ScrapeError::Timeout { selector: opts.container_selector.clone(), timeout: opts.wait_timeout }
            })?;
        info!("Table found");
        thread::sleep(opts.table_settle);
        Ok(Self { tab, container, opts })
    }
}

impl TableView for BrowserTable<'_> {
    fn header_labels(&mut self) -> Result<Vec<String>> {
        let cells = self.tab.find_elements(&self.opts.header_selector).map_err(ScrapeError::browser)?;
        cells.iter()
            .map(|c| c.get_inner_text().map_err(ScrapeError::browser))
            .collect()
    }

    fn rendered_rows(&mut self) -> Result<Vec<RowRead>> {
        // the driver reports "no match" as an error; between renders that just means zero rows
        let rows = match self.tab.find_elements(&self.opts.row_selector) {
            Ok(rows) => rows,
            Err(e) => {
                debug!("no rows rendered: {e}");
                return Ok(Vec::new());
            }
        };
        Ok(rows.iter().map(|row| read_cells(row, &self.opts.cell_selector)).collect())
    }

    fn scroll_position(&mut self) -> Result<f64> {
        let obj = self.container
            .call_js_fn(SCROLL_TOP_JS, Vec::new(), false)
            .map_err(ScrapeError::browser)?;
        obj.value
            .as_ref()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| ScrapeError::missing("scrollTop did not return a number"))
    }

    fn scroll_by(&mut self, px: f64) -> Result<()> {
        self.container
            .call_js_fn(SCROLL_BY_JS, vec![json!(px)], false)
            .map_err(ScrapeError::browser)?;
        Ok(())
    }
}

/// Trimmed text of every cell in `row`. A row with no cells (spacer, header
/// echo) reads as empty and gets dropped by the column-count check.
fn read_cells(row: &Element<'_>, cell_selector: &str) -> RowRead {
    let cells = match row.find_elements(cell_selector) {
        Ok(cells) => cells,
        Err(_) => return Ok(Vec::new()),
    };
    cells.iter()
        .map(|c| c.get_inner_text().map(|t| t.trim().to_string()).map_err(ScrapeError::browser))
        .collect()
}
