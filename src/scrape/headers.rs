// src/scrape/headers.rs
use tracing::{error, info, warn};

use super::TableView;

/// Trimmed, non-empty labels in their original order.
pub fn clean_labels(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect()
}

/// Header row from the table, or `fallback` when it can't be read or is empty.
pub fn extract_headers<V: TableView + ?Sized>(view: &mut V, fallback: &[String]) -> Vec<String> {
    match view.header_labels() {
        Ok(raw) => {
            let headers = clean_labels(raw);
            if headers.is_empty() {
                warn!("Header row is empty; using {} fallback headers", fallback.len());
                fallback.to_vec()
            } else {
                info!("Found {} headers", headers.len());
                headers
            }
        }
        Err(e) => {
            error!("Failed to read headers: {e}; using {} fallback headers", fallback.len());
            fallback.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ScrapeError};
    use crate::scrape::RowRead;

    /// Header row only; the body is never read here.
    struct Thead(Option<Vec<String>>);

    impl TableView for Thead {
        fn header_labels(&mut self) -> Result<Vec<String>> {
            self.0.clone().ok_or_else(|| ScrapeError::missing("thead"))
        }
        fn rendered_rows(&mut self) -> Result<Vec<RowRead>> { Ok(Vec::new()) }
        fn scroll_position(&mut self) -> Result<f64> { Ok(0.0) }
        fn scroll_by(&mut self, _px: f64) -> Result<()> { Ok(()) }
    }

    fn fallback() -> Vec<String> {
        strings!["model", "AMI", "Tedlium"]
    }

    #[test]
    fn labels_are_trimmed_and_blanks_dropped() {
        let mut view = Thead(Some(strings![" model ", "", "AMI"]));
        assert_eq!(extract_headers(&mut view, &fallback()), strings!["model", "AMI"]);
    }

    #[test]
    fn empty_header_row_uses_fallback() {
        let mut view = Thead(Some(Vec::new()));
        assert_eq!(extract_headers(&mut view, &fallback()), fallback());
    }

    #[test]
    fn blank_only_labels_use_fallback() {
        let mut view = Thead(Some(strings!["  ", ""]));
        assert_eq!(extract_headers(&mut view, &fallback()), fallback());
    }

    #[test]
    fn read_error_uses_fallback() {
        let mut view = Thead(None);
        assert_eq!(extract_headers(&mut view, &fallback()), fallback());
    }
}
