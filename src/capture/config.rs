use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, JsonConfig};

/// Timing for the live and history drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Time between live observations.
    pub poll_interval_ms: u64,
    /// Time to let the view re-render after each history page.
    pub page_settle_ms: u64,
    /// How many extra pages to try once history stops moving.
    pub max_stalled_pages: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
            page_settle_ms: 100,
            max_stalled_pages: 3,
        }
    }
}

impl CaptureConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn page_settle(&self) -> Duration {
        Duration::from_millis(self.page_settle_ms)
    }
}

impl JsonConfig for CaptureConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll_interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        let config = CaptureConfig::default();
        assert_eq!(Duration::from_secs(2), config.poll_interval());
        assert_eq!(Duration::from_millis(100), config.page_settle());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let result = CaptureConfig::from_json(r#"{"poll_interval_ms": 0}"#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
