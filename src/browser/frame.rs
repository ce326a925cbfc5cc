// src/browser/frame.rs
//
// The dashboard renders its table in a cross-origin iframe, which CDP can't
// query from the parent page. We read the frame's `src` and open it in a tab
// of its own; dropping the guard closes that tab and leaves the session on the
// top-level page again.

use std::sync::Arc;

use headless_chrome::Tab;
use tracing::{debug, info};
use url::Url;

use super::session::Session;
use crate::config::options::ScrapeOptions;
use crate::error::{Result, ScrapeError};

pub struct FrameContext<'s> {
    tab: Arc<Tab>,
    _session: &'s Session,
}

impl<'s> FrameContext<'s> {
    /// Wait for the first frame matching `opts.frame_selector` and enter it.
    pub fn enter(session: &'s Session, opts: &ScrapeOptions) -> Result<Self> {
        let outer = session.tab();

        info!("Looking for frame `{}`", opts.frame_selector);
        outer
            .wait_for_element_with_custom_timeout(&opts.frame_selector, opts.wait_timeout)
            .map_err(|e| {
                debug!("frame wait: {e}");
                ScrapeError::Timeout { selector: opts.frame_selector.clone(), timeout: opts.wait_timeout }
            })?;

        let frames = outer.find_elements(&opts.frame_selector).map_err(ScrapeError::browser)?;
        info!("Found {} frame(s)", frames.len());

        let first = frames.first().ok_or_else(|| ScrapeError::missing("frame vanished after wait"))?;
        let src = first
            .get_attribute_value("src")
            .map_err(ScrapeError::browser)?
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ScrapeError::missing("frame has no src"))?;
        let target = resolve_src(&outer.get_url(), &src)?;

        let tab = session.new_tab()?;
        tab.navigate_to(target.as_str()).map_err(ScrapeError::browser)?;
        tab.wait_until_navigated().map_err(ScrapeError::browser)?;
        info!("Switched into frame {target}");

        Ok(Self { tab, _session: session })
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }
}

impl Drop for FrameContext<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(false) {
            debug!("closing frame tab: {e}");
        }
        debug!("Left frame; back on the top-level page");
    }
}

/// Frame `src` may be relative to the page that hosts it.
pub fn resolve_src(page_url: &str, src: &str) -> Result<Url> {
    Ok(Url::parse(page_url)?.join(src.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_src_wins() {
        let u = resolve_src(
            "https://huggingface.co/spaces/hf-audio/open_asr_leaderboard",
            "https://hf-audio-open-asr-leaderboard.hf.space/?__theme=light",
        ).unwrap();
        assert_eq!(u.host_str(), Some("hf-audio-open-asr-leaderboard.hf.space"));
    }

    #[test]
    fn relative_src_joins_page() {
        let u = resolve_src("https://example.org/spaces/x/y", "/embed/y").unwrap();
        assert_eq!(u.as_str(), "https://example.org/embed/y");
    }
}
