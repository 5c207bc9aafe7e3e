//! # Session Configuration
//!
//! Translator and capture settings can be given as JSON, either inline or
//! from a file. Every field has a default so partial documents work.
//!
//! ```json
//! {
//!   "translator": { "hero_name": "Guest10388" },
//!   "capture": { "page_settle_ms": 250 }
//! }
//! ```
//!
//! ```rust
//! use hh_translate::config::{JsonConfig, SessionConfig};
//!
//! let config =
//!     SessionConfig::from_json(r#"{"translator": {"hero_name": "Guest10388"}}"#).unwrap();
//! assert_eq!("Guest10388", config.translator.hero_name);
//! assert_eq!(2000, config.capture.poll_interval_ms);
//! ```
use std::{io::ErrorKind, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::capture::CaptureConfig;
use crate::translate::TranslatorConfig;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Shared loading for JSON backed configuration types.
pub trait JsonConfig: DeserializeOwned {
    /// Check values that serde can't express. Defaults to accepting anything.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Parse and validate inline JSON.
    fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON file.
    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to parse as file path first, then as inline JSON
    fn from_str_or_file(input: &str) -> Result<Self, ConfigError> {
        match Self::from_file(input) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                Self::from_json(input)
            }
            Err(err) => Err(err),
        }
    }
}

/// Everything a capture run needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub translator: TranslatorConfig,
    pub capture: CaptureConfig,
}

impl JsonConfig for SessionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.translator.validate()?;
        self.capture.validate()
    }
}
