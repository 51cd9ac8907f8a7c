use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocols::DecodeOptions;

/// Default serial speed of the radio bridge.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
/// Upper bound for one response read.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Session and transport settings.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// # Examples
/// ```
/// use benchlink_core::SessionConfig;
///
/// let config = SessionConfig::from_json_str(r#"{ "read_timeout_ms": 250 }"#).unwrap();
/// assert_eq!(config.read_timeout_ms, 250);
/// assert!(config.verify_checksum);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub baud_rate: u32,
    /// Deadline for a single blocking read; a stalled link surfaces as a
    /// timeout instead of hanging the poll loop.
    pub read_timeout_ms: u64,
    pub max_response_bytes: usize,
    pub verify_checksum: bool,
    /// Pause between poll cycles. Zero polls back-to-back.
    pub poll_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            verify_checksum: true,
            poll_interval_ms: 0,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_response_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "max_response_bytes",
                reason: "must be greater than zero",
            });
        }
        if self.baud_rate == 0 {
            return Err(ConfigError::Invalid {
                field: "baud_rate",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            verify_checksum: self.verify_checksum,
        }
    }
}
