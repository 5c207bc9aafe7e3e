use thiserror::Error;

/// Reasons a hand view can't be turned into a record yet.
///
/// None of these are fatal. The view is usually still rendering or belongs
/// to a hand the hero sat out, so callers retry on the next observation.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TranslateError {
    #[error("Hand was not dealt to the hero or the view is still loading")]
    NotHeroHandOrIncomplete,

    #[error("No hand number found in the view")]
    MissingId,

    #[error("Hand has not finished yet")]
    HandIncomplete,
}
