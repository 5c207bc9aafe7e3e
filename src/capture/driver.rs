use tracing::{debug, info, instrument, trace, warn};

use crate::store::HandAccumulator;
use crate::translate::{HandId, HandTranslator, TranslateError};

use super::{CaptureConfig, CaptureError, HistoryPager, LogView};

/// What a single observation of the log produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new hand was added to the store.
    Stored(HandId),
    /// The hand was already in the store.
    Duplicate(HandId),
    /// The view wasn't a finished hero hand yet.
    Rejected(TranslateError),
    /// No log was on screen.
    NoView,
}

/// Totals over a run of observations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureReport {
    /// Observations made.
    pub observed: usize,
    pub stored: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

impl CaptureReport {
    fn record(&mut self, outcome: &TickOutcome) {
        self.observed += 1;
        match outcome {
            TickOutcome::Stored(_) => self.stored += 1,
            TickOutcome::Duplicate(_) => self.duplicates += 1,
            TickOutcome::Rejected(_) => self.rejected += 1,
            TickOutcome::NoView => {}
        }
    }
}

/// Look at the view once and store the hand if it is ready.
pub fn capture_tick<V>(
    view: &mut V,
    translator: &HandTranslator,
    store: &mut HandAccumulator,
) -> TickOutcome
where
    V: LogView + ?Sized,
{
    let Some(block) = view.snapshot() else {
        trace!("No log view to capture");
        return TickOutcome::NoView;
    };

    match translator.translate(&block.raw_text, &block.lines) {
        Ok(record) => {
            let id = record.id().clone();
            if store.insert(record) {
                info!(%id, hands = store.len(), "Saved hand");
                TickOutcome::Stored(id)
            } else {
                TickOutcome::Duplicate(id)
            }
        }
        Err(reason) => {
            trace!(%reason, "Hand view not ready");
            TickOutcome::Rejected(reason)
        }
    }
}

/// Observe a live view `ticks` times, waiting the poll interval in between.
#[instrument(level = "debug", skip(view, translator, store, config))]
pub fn poll_live<V>(
    view: &mut V,
    translator: &HandTranslator,
    store: &mut HandAccumulator,
    config: &CaptureConfig,
    ticks: usize,
) -> CaptureReport
where
    V: LogView + ?Sized,
{
    let mut report = CaptureReport::default();
    for tick in 0..ticks {
        if tick > 0 {
            std::thread::sleep(config.poll_interval());
        }
        let outcome = capture_tick(view, translator, store);
        report.record(&outcome);
    }
    debug!(?report, "Live polling finished");
    report
}

/// Walk the history back to the oldest hand, storing every finished hand.
///
/// Paging stops once the view reports position `"1"` or stops moving, after
/// `max_stalled_pages` extra attempts to rule out a slow render. The view is
/// returned to the newest hand afterwards.
#[instrument(level = "debug", skip(pager, translator, store, config))]
pub fn scrape_history<P>(
    pager: &mut P,
    translator: &HandTranslator,
    store: &mut HandAccumulator,
    config: &CaptureConfig,
) -> Result<CaptureReport, CaptureError>
where
    P: HistoryPager + ?Sized,
{
    if !pager.is_available() {
        warn!("History controls not found");
        return Err(CaptureError::HistoryUnavailable);
    }

    let mut report = CaptureReport::default();
    let mut last_position: Option<String> = None;
    let mut stalled: u32 = 0;

    loop {
        let outcome = capture_tick(pager, translator, store);
        report.record(&outcome);

        let position = pager.position().unwrap_or_else(|| "0".to_string());
        if position == "1" || last_position.as_deref() == Some(position.as_str()) {
            if stalled > config.max_stalled_pages {
                break;
            }
            stalled += 1;
        } else {
            stalled = 0;
        }
        trace!(%position, stalled, "History page visited");
        last_position = Some(position);

        pager.page_back();
        pager.settle(config.page_settle());
    }

    pager.jump_to_end();
    info!(
        hands = store.len(),
        stored = report.stored,
        "History scrape complete"
    );
    Ok(report)
}
