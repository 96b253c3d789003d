//! Name rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::registration::{NameValidationPolicy, DEFAULT_MAX_NAME_LENGTH};

/// Name rules configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NameConfig {
    /// Character policy (`strict` or `extended`)
    #[serde(default)]
    pub policy: NameValidationPolicy,

    /// Maximum length of a trimmed name, in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl NameConfig {
    /// Validate name configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_length == 0 {
            return Err(ValidationError::InvalidMaxNameLength);
        }
        Ok(())
    }
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            policy: NameValidationPolicy::default(),
            max_length: default_max_length(),
        }
    }
}

fn default_max_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}
