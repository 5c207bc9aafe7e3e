use thiserror::Error;

/// Errors from reading cards out of site log text.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardParseError {
    #[error("No cards found")]
    Empty,
    #[error("Unexpected char {0:?} in card text")]
    UnexpectedChar(char),
    #[error("Card value without a suit")]
    DanglingValue,
    #[error("Card suit without a value")]
    DanglingSuit,
}
