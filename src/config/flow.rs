//! Flow control configuration

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::registration::{ExhaustionPolicy, DEFAULT_MAX_ATTEMPTS};

/// Retry and restart behaviour of the registration flow
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// Attempts per prompt before exhaustion
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// What happens when a prompt is exhausted (`restart` or `terminate`)
    #[serde(default)]
    pub on_exhaustion: ExhaustionPolicy,

    /// Fixed "today" for age computation (YYYY-MM-DD)
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl FlowConfig {
    /// Validate flow configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_attempts == 0 {
            return Err(ValidationError::InvalidMaxAttempts);
        }
        Ok(())
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            on_exhaustion: ExhaustionPolicy::default(),
            reference_date: None,
        }
    }
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_config_defaults() {
        let config = FlowConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.on_exhaustion, ExhaustionPolicy::Restart);
        assert!(config.reference_date.is_none());
    }

    #[test]
    fn test_zero_attempts_is_invalid() {
        let config = FlowConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxAttempts));
    }

    #[test]
    fn test_flow_config_deserialization() {
        let json = r#"{
            "max_attempts": 5,
            "on_exhaustion": "terminate",
            "reference_date": "2026-01-02"
        }"#;

        let config: FlowConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.on_exhaustion, ExhaustionPolicy::Terminate);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2026, 1, 2));
    }
}
