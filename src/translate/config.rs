use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, JsonConfig};

/// How translated hands should be labelled.
///
/// `hero_name` has to match the name the site uses for the hero in action
/// lines. Nothing reconciles the two, so a mismatch produces a record where
/// the hole cards belong to a player who never acts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Name put on the `Dealt to` line.
    pub hero_name: String,
    /// Poker room named at the start of every header.
    pub room_label: String,
    /// Game and stakes description following the hand number.
    pub stakes: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            hero_name: "Hero".to_string(),
            room_label: "PokerStars".to_string(),
            stakes: "Hold'em No Limit (1/2 USD)".to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Default labels with the given hero name.
    pub fn with_hero(hero_name: impl Into<String>) -> Self {
        Self {
            hero_name: hero_name.into(),
            ..Self::default()
        }
    }
}

impl JsonConfig for TranslatorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.hero_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "hero_name must not be empty".to_string(),
            ));
        }
        if self.room_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "room_label must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TranslatorConfig::default();
        assert_eq!("Hero", config.hero_name);
        assert_eq!("PokerStars", config.room_label);
        assert_eq!("Hold'em No Limit (1/2 USD)", config.stakes);
    }

    #[test]
    fn test_partial_json() {
        let config = TranslatorConfig::from_json(r#"{"hero_name": "Guest10388"}"#).unwrap();
        assert_eq!(TranslatorConfig::with_hero("Guest10388"), config);
    }

    #[test]
    fn test_empty_hero_rejected() {
        let result = TranslatorConfig::from_json(r#"{"hero_name": ""}"#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
