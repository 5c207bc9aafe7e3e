//! # Capture
//!
//! The seams between the translator and whatever is watching the site's
//! game log. A [`LogView`] hands out the currently rendered hand, a
//! [`HistoryPager`] can also step backwards through older hands. The
//! drivers in this module feed what they see through a
//! [`HandTranslator`](crate::translate::HandTranslator) into a
//! [`HandAccumulator`](crate::store::HandAccumulator) that the caller owns.
//!
//! ```rust
//! use hh_translate::capture::{scrape_history, CaptureConfig, RawHandBlock, ReplayLog};
//! use hh_translate::store::HandAccumulator;
//! use hh_translate::translate::HandTranslator;
//!
//! let mut log = ReplayLog::new(vec![
//!     RawHandBlock::from_lines(["Hand #1", "Dealt A♠K♠ Preflop", "P1 collects 3 from pot"]),
//!     RawHandBlock::from_lines(["Hand #2", "Dealt 2♣7♦ Preflop", "P2 collects 3 from pot"]),
//! ]);
//! let mut store = HandAccumulator::new();
//! let report = scrape_history(
//!     &mut log,
//!     &HandTranslator::default(),
//!     &mut store,
//!     &CaptureConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(2, report.stored);
//! assert_eq!(2, store.len());
//! ```
mod config;
mod driver;
mod replay;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use config::CaptureConfig;
pub use driver::{capture_tick, poll_live, scrape_history, CaptureReport, TickOutcome};
pub use replay::ReplayLog;

/// One rendered hand view as the page showed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHandBlock {
    /// Flattened text of the whole view.
    #[serde(default)]
    pub raw_text: String,
    /// Each log line in display order.
    pub lines: Vec<String>,
}

impl RawHandBlock {
    pub fn new(raw_text: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            lines,
        }
    }

    /// Build a view whose flattened text is its lines joined by newlines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            raw_text: lines.join("\n"),
            lines,
        }
    }
}

/// Something that can show the hand currently on screen.
pub trait LogView {
    /// The rendered hand, or `None` when there is no log on screen.
    fn snapshot(&mut self) -> Option<RawHandBlock>;
}

/// A log view with history controls.
pub trait HistoryPager: LogView {
    /// Whether the history controls are reachable at all.
    fn is_available(&self) -> bool {
        true
    }

    /// The history position the view reports. `"1"` is the oldest hand.
    fn position(&self) -> Option<String>;

    /// Step one hand further into the past.
    fn page_back(&mut self);

    /// Return to the newest hand.
    fn jump_to_end(&mut self);

    /// Wait for the view to re-render after paging.
    fn settle(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Errors from driving or loading a capture source.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("History controls are not available, open the log first")]
    HistoryUnavailable,

    #[error("Failed to parse hand on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
