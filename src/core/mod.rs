/// Errors for card parsing.
mod error;
/// Export `CardParseError`
pub use self::error::CardParseError;

/// Cards, values, suits, and the free form card run parser.
mod card;
/// Export `Card`, `Value`, `Suit` and the parsing helpers.
pub use self::card::{format_cards, parse_card_run, Card, Suit, Value};
