// tests/common/mod.rs
#![allow(dead_code)]

use leaderboard_scrape::{Result, ScrapeError, scrape::{RowRead, TableView}};

pub const ROW_PX: f64 = 20.0;

/// In-memory stand-in for the leaderboard: `total` rows, of which only
/// `window` are rendered at the current scroll offset.
pub struct VirtualTable {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    pub window: usize,
    pub offset: f64,
    /// Scroll stops moving after this many `scroll_by` calls.
    pub freeze_after: Option<usize>,
    pub scroll_calls: usize,
}

impl VirtualTable {
    pub fn new(headers: &[&str], total: usize, window: usize) -> Self {
        let rows = (0..total)
            .map(|i| {
                let mut cells = vec![format!("org/model-{i:03}")];
                cells.extend((1..headers.len()).map(|c| format!("{}.{}", i, c)));
                cells
            })
            .collect();
        Self {
            headers: Some(headers.iter().map(|h| h.to_string()).collect()),
            rows,
            window,
            offset: 0.0,
            freeze_after: None,
            scroll_calls: 0,
        }
    }

    fn max_offset(&self) -> f64 {
        self.rows.len().saturating_sub(self.window) as f64 * ROW_PX
    }
}

impl TableView for VirtualTable {
    fn header_labels(&mut self) -> Result<Vec<String>> {
        self.headers.clone().ok_or_else(|| ScrapeError::missing("thead"))
    }

    fn rendered_rows(&mut self) -> Result<Vec<RowRead>> {
        let first = (self.offset / ROW_PX) as usize;
        Ok(self.rows.iter().skip(first).take(self.window).cloned().map(Ok).collect())
    }

    fn scroll_position(&mut self) -> Result<f64> {
        Ok(self.offset)
    }

    fn scroll_by(&mut self, px: f64) -> Result<()> {
        self.scroll_calls += 1;
        if self.freeze_after.is_some_and(|k| self.scroll_calls > k) {
            return Ok(());
        }
        self.offset = (self.offset + px).min(self.max_offset());
        Ok(())
    }
}

/// Scrolls happily but always shows the same rows.
pub struct StuckTable {
    pub rows: Vec<Vec<String>>,
    pub offset: f64,
}

impl TableView for StuckTable {
    fn header_labels(&mut self) -> Result<Vec<String>> {
        Ok(vec![String::from("model")])
    }

    fn rendered_rows(&mut self) -> Result<Vec<RowRead>> {
        Ok(self.rows.iter().cloned().map(Ok).collect())
    }

    fn scroll_position(&mut self) -> Result<f64> {
        Ok(self.offset)
    }

    fn scroll_by(&mut self, px: f64) -> Result<()> {
        self.offset += px;
        Ok(())
    }
}
