// src/scrape/scroll.rs
//
// Incremental scroll over a virtualized table. Only a window of rows exists in
// the DOM at a time, so we read what's rendered, scroll a step, and repeat,
// keying rows on their first cell (the model name).

use std::collections::HashSet;
use std::thread;

use tracing::{debug, info, warn};

use super::TableView;
use crate::config::options::ScrollPolicy;
use crate::error::Result;
use crate::progress::Progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Collected `target_rows` rows.
    TargetReached,
    /// Scroll offset didn't move: bottom of the table.
    BottomReached,
    /// `max_stalls` passes in a row found nothing new.
    Stalled,
    /// Hit `max_scrolls`.
    ScrollBudget,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    /// Unique rows in first-seen order.
    pub rows: Vec<Vec<String>>,
    /// Read passes performed.
    pub iterations: usize,
    pub stop: StopReason,
}

/// Scroll `view` top to bottom, collecting rows that have exactly `columns`
/// cells and a first cell not seen before.
pub fn extract_rows<V: TableView + ?Sized>(
    view: &mut V,
    columns: usize,
    policy: &ScrollPolicy,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Extraction> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut scrolls = 0usize;
    let mut stalls = 0usize;
    let mut passes = 0usize;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(policy.target_rows);
    }

    let stop = loop {
        if scrolls >= policy.max_scrolls { break StopReason::ScrollBudget; }
        if stalls >= policy.max_stalls { break StopReason::Stalled; }
        passes += 1;

        let rendered = view.rendered_rows()?;
        debug!("Pass {passes}: {} rows rendered", rendered.len());

        let mut added = 0usize;
        for (i, read) in rendered.into_iter().enumerate() {
            let cells = match read {
                Ok(cells) => cells,
                Err(e) => {
                    warn!("Row {i} unreadable: {e}");
                    continue;
                }
            };
            // partially rendered rows come through short
            if cells.len() != columns { continue; }
            let Some(name) = cells.first().map(|c| c.trim()) else { continue };
            if name.is_empty() || seen.contains(name) { continue; }

            let name = name.to_string();
            seen.insert(name.clone());
            rows.push(cells);
            added += 1;
            info!("Added model {}: {}", rows.len(), name);
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(rows.len(), &name);
            }
        }

        if added == 0 {
            stalls += 1;
            info!("No new models found. Attempt {stalls}/{}", policy.max_stalls);
        } else {
            stalls = 0;
        }

        if policy.target_rows.is_some_and(|target| rows.len() >= target) {
            info!("Collected {} models, enough", rows.len());
            break StopReason::TargetReached;
        }

        let before = view.scroll_position()?;
        view.scroll_by(policy.step_px)?;
        if !policy.pause.is_zero() {
            thread::sleep(policy.pause);
        }
        let after = view.scroll_position()?;
        if after == before {
            info!("Reached the end of the table");
            break StopReason::BottomReached;
        }

        scrolls += 1;
    };

    Ok(Extraction { rows, iterations: passes, stop })
}
