//! Translate a poker site's game log into PokerStars style hand histories.
//!
//! The site shows each hand as a list of log lines with glyph suits and its
//! own wording. [`translate::HandTranslator`] turns one finished hand into a
//! standard hand history block, and [`store::HandAccumulator`] collects
//! blocks across a session, keeping one per hand number and exporting them
//! in hand number order.
//!
//! The [`capture`] module holds the seams to whatever watches the page, and
//! [`export`] writes a session to disk.
//!
//! ```rust
//! use hh_translate::store::HandAccumulator;
//! use hh_translate::translate::{HandTranslator, TranslatorConfig};
//!
//! let translator = HandTranslator::new(TranslatorConfig::with_hero("Guest10388"));
//! let lines = [
//!     "Hand #101",
//!     "Dealt A♠K♠ Preflop",
//!     "P1 posts 1",
//!     "Flop: 3♣ 4♣ 5♣",
//!     "P1 collects 10 from pot",
//! ];
//! let record = translator.translate(&lines.join("\n"), lines).unwrap();
//!
//! let mut store = HandAccumulator::new();
//! store.insert(record);
//! let export = store.export_all().unwrap();
//! assert!(export.contains("*** FLOP *** [3c 4c 5c]"));
//! assert!(export.contains("Board [3c 4c 5c]"));
//! ```

/// Cards and suits as they appear in site logs.
pub mod core;

/// Log line rules and the hand translator.
pub mod translate;

/// The deduplicating hand store.
pub mod store;

/// Live and history capture drivers.
pub mod capture;

/// JSON configuration loading.
pub mod config;

/// Session file export.
pub mod export;
