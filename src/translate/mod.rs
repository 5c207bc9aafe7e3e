//! # Hand Translation
//!
//! Converts the log lines of one rendered hand into a PokerStars style hand
//! history block.
//!
//! A hand is only translated once it is ready: the hero must have been
//! dealt in, the view must name a hand number, and the hand must be over.
//! Otherwise [`TranslateError`] says why and the caller tries again later.
//!
//! The output looks like:
//!
//! ```text
//! PokerStars Hand #12: Hold'em No Limit (1/2 USD) - 2024-01-01T00:00:00.000Z
//! Dealt to Guest10388 [Ah 5c]
//! P1 posts small blind 1
//! *** FLOP *** [3c 4c 5c]
//! P1 won 12 from pot
//! *** SUMMARY ***
//! Total pot 12 | Rake 0
//! Board [3c 4c 5c]
//! ```
mod config;
mod errors;
pub mod line;
mod record;
mod translator;

pub use config::TranslatorConfig;
pub use errors::TranslateError;
pub use line::{ParsedLine, Street};
pub use record::{CanonicalHandRecord, HandId};
pub use translator::HandTranslator;
