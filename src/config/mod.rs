//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `REGISTRATION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use registration_flow::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ages {}..={}", config.age.min_age, config.age.max_age);
//! ```

mod age;
mod error;
mod flow;
mod logging;
mod name;

pub use age::AgeConfig;
pub use error::{ConfigError, ValidationError};
pub use flow::FlowConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use name::NameConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Name rules (policy, maximum length)
    #[serde(default)]
    pub name: NameConfig,

    /// Inclusive age bounds
    #[serde(default)]
    pub age: AgeConfig,

    /// Retry budget, exhaustion policy and reference date
    #[serde(default)]
    pub flow: FlowConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `REGISTRATION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `REGISTRATION__AGE__MIN_AGE=18` -> `age.min_age = 18`
    /// - `REGISTRATION__FLOW__ON_EXHAUSTION=terminate` -> `flow.on_exhaustion = Terminate`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REGISTRATION")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.name.validate()?;
        self.age.validate()?;
        self.flow.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::{ExhaustionPolicy, NameValidationPolicy};
    use chrono::NaiveDate;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 7] = [
        "REGISTRATION__NAME__POLICY",
        "REGISTRATION__NAME__MAX_LENGTH",
        "REGISTRATION__AGE__MIN_AGE",
        "REGISTRATION__AGE__MAX_AGE",
        "REGISTRATION__FLOW__MAX_ATTEMPTS",
        "REGISTRATION__FLOW__ON_EXHAUSTION",
        "REGISTRATION__FLOW__REFERENCE_DATE",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.name.max_length, 120);
        assert_eq!(config.age.min_age, 16);
        assert_eq!(config.age.max_age, 70);
        assert_eq!(config.flow.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("REGISTRATION__NAME__POLICY", "strict");
        env::set_var("REGISTRATION__AGE__MIN_AGE", "18");
        env::set_var("REGISTRATION__FLOW__MAX_ATTEMPTS", "5");
        env::set_var("REGISTRATION__FLOW__ON_EXHAUSTION", "terminate");
        env::set_var("REGISTRATION__FLOW__REFERENCE_DATE", "2026-01-02");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.name.policy, NameValidationPolicy::Strict);
        assert_eq!(config.age.min_age, 18);
        assert_eq!(config.age.max_age, 70);
        assert_eq!(config.flow.max_attempts, 5);
        assert_eq!(config.flow.on_exhaustion, ExhaustionPolicy::Terminate);
        assert_eq!(config.flow.reference_date, NaiveDate::from_ymd_opt(2026, 1, 2));
    }

    #[test]
    fn test_validate_reports_bad_bounds() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("REGISTRATION__AGE__MIN_AGE", "80");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidAgeBounds));
    }

    #[test]
    fn test_unparseable_value_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("REGISTRATION__FLOW__MAX_ATTEMPTS", "many");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
