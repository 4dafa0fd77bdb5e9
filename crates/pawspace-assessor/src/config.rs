//! Configuration for the Assessor

use crate::AssessorError;
use pawspace_domain::MAX_SCORE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Assessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessorConfig {
    /// Final score needed for approval (inclusive)
    pub minimum_approval_score: u8,

    /// Maximum time for a single advisory call (seconds)
    pub advisory_timeout_secs: u64,

    /// Extra attempts after the first failed advisory call
    pub advisory_max_retries: u32,

    /// Base delay before the first retry; doubled on each further retry
    pub retry_base_delay_ms: u64,

    /// Upper bound of the random jitter added to each retry delay
    pub retry_jitter_ms: u64,
}

impl Default for AssessorConfig {
    /// Single attempt, 30 second timeout, approval at 70
    fn default() -> Self {
        Self {
            minimum_approval_score: 70,
            advisory_timeout_secs: 30,
            advisory_max_retries: 0,
            retry_base_delay_ms: 500,
            retry_jitter_ms: 250,
        }
    }
}

impl AssessorConfig {
    /// Resilient preset: longer timeout and bounded retries with jitter
    pub fn resilient() -> Self {
        Self {
            advisory_timeout_secs: 60,
            advisory_max_retries: 2,
            ..Self::default()
        }
    }

    /// Get the advisory timeout as a Duration
    pub fn advisory_timeout(&self) -> Duration {
        Duration::from_secs(self.advisory_timeout_secs)
    }

    /// Total number of advisory attempts per assessment
    pub fn total_attempts(&self) -> u32 {
        self.advisory_max_retries.saturating_add(1)
    }

    /// Backoff before retry number `retry` (1-based), without jitter
    pub fn retry_delay(&self, retry: u32) -> Duration {
        let factor = 1u64 << retry.saturating_sub(1).min(16);
        Duration::from_millis(self.retry_base_delay_ms.saturating_mul(factor))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AssessorError> {
        if self.minimum_approval_score > MAX_SCORE {
            return Err(AssessorError::Config(format!(
                "minimum_approval_score must be at most {}",
                MAX_SCORE
            )));
        }
        if self.advisory_timeout_secs == 0 {
            return Err(AssessorError::Config(
                "advisory_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.advisory_max_retries > 10 {
            return Err(AssessorError::Config(
                "advisory_max_retries must be at most 10".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AssessorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| AssessorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, AssessorError> {
        toml::to_string_pretty(self)
            .map_err(|e| AssessorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
