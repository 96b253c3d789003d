//! RetryPrompt - bounded acquisition of one validated value.
//!
//! Asks the same question until the validator accepts an answer or the
//! retry budget runs out. Cancellation from the console is passed straight
//! up and never counts as a failed attempt.

use tracing::debug;

use super::messages;
use crate::domain::foundation::ValidationError;
use crate::domain::registration::RetryBudget;
use crate::ports::{Console, ConsoleError};

/// Result of a bounded prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    /// The validator accepted an answer.
    Accepted(T),
    /// Every attempt was rejected.
    Exhausted { attempts: u32 },
}

impl<T> PromptOutcome<T> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, PromptOutcome::Exhausted { .. })
    }
}

/// A question asked up to `max_attempts` times.
#[derive(Debug, Clone)]
pub struct RetryPrompt {
    field: &'static str,
    prompt: String,
    max_attempts: u32,
}

impl RetryPrompt {
    pub fn new(field: &'static str, prompt: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            field,
            prompt: prompt.into(),
            max_attempts,
        }
    }

    /// Runs the prompt against `console`.
    ///
    /// Each rejection is reported with the number of attempts left. The
    /// budget lives only for this call.
    pub async fn run<T, F>(
        &self,
        console: &mut dyn Console,
        mut validate: F,
    ) -> Result<PromptOutcome<T>, ConsoleError>
    where
        F: FnMut(&str) -> Result<T, ValidationError>,
    {
        let mut budget = RetryBudget::new(self.max_attempts);
        loop {
            let raw = console.read_line(&self.prompt).await?;
            let err = match validate(&raw) {
                Ok(value) => return Ok(PromptOutcome::Accepted(value)),
                Err(err) => err,
            };

            let remaining = budget.record_failure();
            debug!(
                field = self.field,
                code = %err.code(),
                remaining,
                "Input rejected"
            );
            console
                .write_line(&messages::rejection_with_remaining(&err, remaining))
                .await?;

            if budget.is_exhausted() {
                return Ok(PromptOutcome::Exhausted {
                    attempts: budget.used(),
                });
            }
        }
    }
}
