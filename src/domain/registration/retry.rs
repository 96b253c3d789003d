//! Per-prompt retry budget.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of attempts per prompt.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// What the flow does once a prompt's attempts are used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
    /// Discard partial input and start the registration again.
    #[default]
    Restart,
    /// Stop the program with a failure status.
    Terminate,
}

impl fmt::Display for ExhaustionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExhaustionPolicy::Restart => "restart",
            ExhaustionPolicy::Terminate => "terminate",
        };
        write!(f, "{}", s)
    }
}

/// Counts failed attempts against a fixed maximum.
///
/// Created fresh for every acquisition loop and dropped when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    max_attempts: u32,
    used: u32,
}

impl RetryBudget {
    /// Creates a budget; a maximum of zero is raised to one.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            used: 0,
        }
    }

    /// Records a failed attempt and returns how many remain.
    pub fn record_failure(&mut self) -> u32 {
        self.used = (self.used + 1).min(self.max_attempts);
        self.remaining()
    }

    pub fn remaining(&self) -> u32 {
        self.max_attempts - self.used
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_exhaustion() {
        let mut budget = RetryBudget::new(3);
        assert_eq!(budget.remaining(), 3);
        assert_eq!(budget.record_failure(), 2);
        assert_eq!(budget.record_failure(), 1);
        assert!(!budget.is_exhausted());
        assert_eq!(budget.record_failure(), 0);
        assert!(budget.is_exhausted());
        assert_eq!(budget.used(), 3);
    }

    #[test]
    fn does_not_underflow_past_exhaustion() {
        let mut budget = RetryBudget::new(1);
        budget.record_failure();
        assert_eq!(budget.record_failure(), 0);
        assert_eq!(budget.used(), 1);
    }

    #[test]
    fn zero_maximum_still_allows_one_attempt() {
        let budget = RetryBudget::new(0);
        assert_eq!(budget.max_attempts(), 1);
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn exhaustion_policy_defaults_to_restart() {
        assert_eq!(ExhaustionPolicy::default(), ExhaustionPolicy::Restart);
        let policy: ExhaustionPolicy = serde_json::from_str("\"terminate\"").unwrap();
        assert_eq!(policy, ExhaustionPolicy::Terminate);
        assert_eq!(policy.to_string(), "terminate");
    }
}
