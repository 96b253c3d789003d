//! Age bounds configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::registration::{DEFAULT_MAX_AGE, DEFAULT_MIN_AGE};

const AGE_LIMIT: i32 = 150;

/// Inclusive bounds on the age computed from a date of birth
#[derive(Debug, Clone, Deserialize)]
pub struct AgeConfig {
    #[serde(default = "default_min_age")]
    pub min_age: i32,

    #[serde(default = "default_max_age")]
    pub max_age: i32,
}

impl AgeConfig {
    /// Validate age configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_age < 0 || self.min_age > self.max_age {
            return Err(ValidationError::InvalidAgeBounds);
        }
        if self.max_age > AGE_LIMIT {
            return Err(ValidationError::MaxAgeTooLarge);
        }
        Ok(())
    }
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            min_age: default_min_age(),
            max_age: default_max_age(),
        }
    }
}

fn default_min_age() -> i32 {
    DEFAULT_MIN_AGE
}

fn default_max_age() -> i32 {
    DEFAULT_MAX_AGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_config_defaults() {
        let config = AgeConfig::default();
        assert_eq!(config.min_age, 16);
        assert_eq!(config.max_age, 70);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_are_invalid() {
        let config = AgeConfig { min_age: 30, max_age: 20 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAgeBounds));

        let config = AgeConfig { min_age: -1, max_age: 20 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAgeBounds));
    }

    #[test]
    fn test_max_age_limit() {
        let config = AgeConfig { min_age: 0, max_age: 151 };
        assert_eq!(config.validate(), Err(ValidationError::MaxAgeTooLarge));
    }
}
